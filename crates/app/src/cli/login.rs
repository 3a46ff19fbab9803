use super::Backoffice;

pub(crate) fn run(backoffice: &Backoffice) -> Result<(), String> {
    let user = &backoffice.session.user;

    println!("signed_in_as: {}", user.email);
    println!("user_id: {}", user.id);
    if let Some(name) = &user.name {
        println!("user_name: {name}");
    }

    Ok(())
}
