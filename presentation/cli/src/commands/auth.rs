use business::domain::auth::use_cases::reset_password::ResetPasswordParams;
use business::domain::auth::use_cases::sign_in::SignInParams;
use business::domain::auth::use_cases::sign_up::SignUpParams;

use crate::setup::dependency_injection::DependencyContainer;

// Provider failures are printed verbatim so the user sees the real reason,
// e.g. "Invalid login credentials".

pub async fn sign_in(container: &DependencyContainer, email: String, password: String) {
    match container
        .sign_in
        .execute(SignInParams { email, password })
        .await
    {
        Ok(()) => println!("Signed in successfully!"),
        Err(err) => println!("{err}"),
    }
}

pub async fn sign_up(container: &DependencyContainer, email: String, password: String) {
    match container
        .sign_up
        .execute(SignUpParams { email, password })
        .await
    {
        Ok(()) => println!("Account created! Check your email to confirm it."),
        Err(err) => println!("{err}"),
    }
}

pub async fn reset_password(container: &DependencyContainer, email: String) {
    let params = ResetPasswordParams {
        email,
        redirect_to: container.reset_redirect.clone(),
    };

    match container.reset_password.execute(params).await {
        Ok(()) => println!("Password reset email sent!"),
        Err(err) => println!("{err}"),
    }
}
