use std::thread;
use std::time::Duration;

use console::style;

pub const BANNER: &str = r"
    _____            __                                            __
   /     |          /  |                                          /  |
   $$$$$ |  ______  $$ |____          ______   _______    ______  $$ | __    __  ________   ______    ______
      $$ | /      \ $$      \        /      \ /       \  /      \ $$ |/  |  /  |/        | /      \  /      \
 __   $$ |/$$$$$$  |$$$$$$$  |       $$$$$$  |$$$$$$$  | $$$$$$  |$$ |$$ |  $$ |$$$$$$$$/ /$$$$$$  |/$$$$$$  |
/  |  $$ |$$ |  $$ |$$ |  $$ |       /    $$ |$$ |  $$ | /    $$ |$$ |$$ |  $$ |  /  $$/  $$    $$ |$$ |  $$/
$$ \__$$ |$$ \__$$ |$$ |__$$ |      /$$$$$$$ |$$ |  $$ |/$$$$$$$ |$$ |$$ \__$$ | /$$$$/__ $$$$$$$$/ $$ |
$$    $$/ $$    $$/ $$    $$/       $$    $$ |$$ |  $$ |$$    $$ |$$ |$$    $$ |/$$      |$$       |$$ |
 $$$$$$/   $$$$$$/  $$$$$$$/         $$$$$$$/ $$/   $$/  $$$$$$$/ $$/  $$$$$$$ |$$$$$$$$/  $$$$$$$/ $$/
                                                                      /  \__$$ |
                                                                      $$    $$/
                                                                       $$$$$$/
";

/// Prints the banner one line at a time, pausing `delay` after each line.
pub fn print_banner(delay: Duration) {
    for line in BANNER.lines() {
        println!("{}", style(line).cyan());
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_has_twelve_art_lines() {
        let art: Vec<&str> = BANNER.lines().filter(|l| !l.trim().is_empty()).collect();
        assert_eq!(art.len(), 12);
    }
}
