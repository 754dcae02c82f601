use super::prelude::*;

pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

/// A missing account and a wrong password are indistinguishable to the
/// caller.
pub fn login_with_email<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    repo.try_get_user_by_email(login.email)
        .map_err(Error::Repo)
        .and_then(|user| match user {
            Some(user) if user.password.verify(login.password) => Ok(user),
            _ => Err(Error::Credentials),
        })
}
