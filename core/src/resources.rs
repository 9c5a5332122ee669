//! The concrete resources and their endpoint aliases.

use crate::endpoint::{Endpoint, Resource};
use crate::http::UreqTransport;
use crate::types::{CommentDto, UserDto};

#[derive(Debug, Clone, Copy)]
pub struct Comments;

impl Resource for Comments {
    type Dto = CommentDto;

    const NAME: &'static str = "Comment";
    const COLLECTION: &'static str = "/comments";
    const ITEM: &'static str = "/comments/{commentID}";
}

#[derive(Debug, Clone, Copy)]
pub struct Users;

impl Resource for Users {
    type Dto = UserDto;

    const NAME: &'static str = "User";
    const COLLECTION: &'static str = "/users";
    const ITEM: &'static str = "/users/{userID}";
}

pub type CommentEndpoint<T = UreqTransport> = Endpoint<Comments, T>;
pub type UserEndpoint<T = UreqTransport> = Endpoint<Users, T>;
