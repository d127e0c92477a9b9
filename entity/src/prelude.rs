pub use super::friend_request::Entity as FriendRequest;
pub use super::friends::Entity as Friends;
pub use super::game::Entity as Game;
pub use super::player::Entity as Player;
pub use super::player_game::Entity as PlayerGame;
pub use super::player_role::Entity as PlayerRole;
pub use super::role::Entity as Role;
