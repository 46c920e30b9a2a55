use crate::model::user::UserDto;

/// The logged in user, shared through context as a `Signal<UserState>`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    /// Whether `/api/auth/user` has answered yet
    pub fetched: bool,
}

impl UserState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.is_admin())
    }
}
