pub mod friends;
