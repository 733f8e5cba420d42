use std::sync::Arc;

use crate::stores::SessionStore;
use crate::types::user::{LoginData, RegisterData, UpdateProfileData, User};

/// Log in and report the authenticated account
pub async fn login(
    session: &Arc<SessionStore>,
    email: String,
    password: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = session.login(&LoginData { email, password }).await?;
    println!("Welcome back, {}!", user.name);
    Ok(())
}

/// Create an account; the new identity is logged in immediately
pub async fn register(
    session: &Arc<SessionStore>,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    password: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = session
        .register(&RegisterData {
            name,
            email,
            phone,
            password,
        })
        .await?;
    println!("Welcome, {}! Your account has been created.", user.name);
    Ok(())
}

pub fn logout(session: &Arc<SessionStore>) {
    session.logout();
    println!("You have been logged out.");
}

/// Resolve the current identity, resuming a persisted session if needed
pub async fn whoami(session: &Arc<SessionStore>) -> Result<(), Box<dyn std::error::Error>> {
    match session.fetch_current().await? {
        Some(user) => print_user(&user),
        None => println!("Not logged in."),
    }
    Ok(())
}

pub async fn update_profile(
    session: &Arc<SessionStore>,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    require_session(session).await?;
    let user = session
        .update_profile(&UpdateProfileData { name, email, phone })
        .await?;
    println!("Profile updated.");
    print_user(&user);
    Ok(())
}

pub async fn delete_profile(
    session: &Arc<SessionStore>,
) -> Result<(), Box<dyn std::error::Error>> {
    require_session(session).await?;
    session.delete_profile().await?;
    println!("Your account has been deleted.");
    Ok(())
}

/// Resume the persisted session or fail with a login hint
pub async fn require_session(
    session: &Arc<SessionStore>,
) -> Result<User, Box<dyn std::error::Error>> {
    if let Some(user) = session.current_user() {
        return Ok(user);
    }
    match session.fetch_current().await? {
        Some(user) => Ok(user),
        None => Err("Not logged in. Run `tailordesk login` first.".into()),
    }
}

fn print_user(user: &User) {
    println!("{} ({})", user.name, user.id);
    if let Some(email) = &user.email {
        println!("  email: {}", email);
    }
    if let Some(phone) = &user.phone {
        println!("  phone: {}", phone);
    }
}
