use std::fmt;

use chrono::Utc;

pub fn log(id: &impl fmt::Display, message: &str) {
    println!("{} {}: {}", timestamp(), id, message);
}

pub fn error(id: &impl fmt::Display, message: &str) {
    eprintln!("{} {}: ERROR {}", timestamp(), id, message);
}

fn timestamp() -> String {
    let time = Utc::now().time().to_string();
    time.chars().take(12).collect()
}
