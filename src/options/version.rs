use colored::Colorize;

fn banner() -> String {
    format!(
        "{} v{} ({}-{})\n{}\nAuthor: {}",
        env!("CARGO_PKG_NAME").bright_green(),
        env!("CARGO_PKG_VERSION").bright_white(),
        std::env::consts::OS,
        std::env::consts::ARCH,
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_AUTHORS").bright_blue()
    )
}

pub fn show() {
    println!("{}", banner());
}
