// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
 _                    _ _____
| |    ___  __ _  __ _| | ____|__ _ ___  ___
| |   / _ \/ _` |/ _` | |  _| / _` / __|/ _ \
| |__|  __/ (_| | (_| | | |__| (_| \__ \  __/
|_____\___|\__, |\__,_|_|_____\__,_|___/\___|
           |___/

    Legal documents, explained in plain English
"#;
    println!("{}", banner);
}
