mod character;
mod favorite;
mod user;
