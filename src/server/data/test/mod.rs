mod friend;
mod player;
mod role;
