use colored::Colorize;

const BANNER: &str = r"
  _                        _           _
 | |__   ___ _ __ ___   __| | ___  ___| | __
 | '_ \ / _ \ '__/ _ \ / _` |/ _ \/ __| |/ /
 | | | |  __/ | | (_) | (_| |  __/ (__|   <
 |_| |_|\___|_|  \___/ \__,_|\___|\___|_|\_\
";

pub fn print_banner_with_version() {
    println!("{}", BANNER.cyan());
    println!(
        "  {} {}",
        "herodeck".bold(),
        env!("CARGO_PKG_VERSION").dimmed()
    );
    println!("  {}", crate::deck::COURSE_TITLE);
}
