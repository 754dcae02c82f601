use rand::Rng;

use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: EmailAddress,
    pub name: String,
    pub city: String,
    pub password: String,
}

pub fn create_new_user<R: UserRepo>(repo: &R, account: NewAccount) -> Result<User> {
    let password = account.password.parse::<Password>()?;
    if repo.try_get_user_by_email(&account.email)?.is_some() {
        return Err(Error::UserExists);
    }
    let username = generate_username(repo, &account.name)?;
    log::debug!("Creating new user: email = {}", account.email);
    let new_user = NewUser {
        email: account.email,
        username,
        name: account.name,
        city: account.city,
        password,
    };
    Ok(repo.create_user(new_user)?)
}

// Derived from the display name plus a random suffix, retried until it
// does not collide with an existing account.
fn generate_username<R: UserRepo>(repo: &R, name: &str) -> Result<String> {
    let base: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    loop {
        let candidate = format!("{base}{}", rand::thread_rng().gen_range(0..1000));
        if repo.try_get_user_by_username(&candidate)?.is_none() {
            return Ok(candidate);
        }
    }
}
