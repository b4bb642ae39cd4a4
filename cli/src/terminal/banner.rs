use colored::*;

use crate::terminal::print;

const BANNER_0: &str = r#"
     _   _      _         _               _____          _
    | \ | | ___| |_ _ __ | | __ _ _ __   |_   _| __ __ _(_)_ __   ___ _ __
    |  \| |/ _ \ __| '_ \| |/ _` | '_ \    | || '__/ _` | | '_ \ / _ \ '__|
    | |\  |  __/ |_| |_) | | (_| | | | |   | || | | (_| | | | | |  __/ |
    |_| \_|\___|\__| .__/|_|\__,_|_| |_|   |_||_|  \__,_|_|_| |_|\___|_|
                   |_|
"#;

const BANNER_1: &str = r#"
              ┌──────────┐        ┌──────────┐        ┌──────────┐
              │   WAN    │────────│  SERVER  │────────│  CLIENT  │
              └──────────┘ enp3s0 └──────────┘ enp4s0 └──────────┘
                         sudo netplan apply && ping
"#;

const BANNER_2: &str = r#"
        network:
          version: 2
          ethernets:
            enp4s0:
              addresses: [ ??? ]      <- your move
"#;

pub fn print() {
    let n: usize = rand::random_range(0..3);
    let art: ColoredString = match n {
        0 => BANNER_0.bright_blue(),
        1 => BANNER_1.green(),
        _ => BANNER_2.truecolor(80, 80, 100),
    };
    print::print(&art.to_string());
}
