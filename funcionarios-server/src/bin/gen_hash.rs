//! Print an argon2 hash for seeding `usuarios.senha`
//!
//! Usage: gen_hash <password>

use funcionarios_server::util::hash_password;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(password) = std::env::args().nth(1) else {
        eprintln!("usage: gen_hash <password>");
        std::process::exit(2);
    };
    let hash = hash_password(&password).map_err(|e| e.to_string())?;
    println!("{hash}");
    Ok(())
}
