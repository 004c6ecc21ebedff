//! Intro script data
//!
//! The cutscene slides, boot-sequence lines, and banner the host plays
//! before the prompt loop. Pure data: pacing and rendering belong to
//! the host (see the CLI crate).

use crate::{SYSTEM_NAME, SYSTEM_VERSION};

/// One cutscene slide.
#[derive(Debug, Clone, Copy)]
pub struct Cutscene {
    /// ASCII art shown above the caption.
    pub art: &'static str,
    /// Caption line.
    pub text: &'static str,
}

const SCENE_STONE: &str = r#"
      /\        /\    _/\_
 /\  /  \  /\  /  \  /    \
/  \/    \/  \/    \/      \
        .  .  .  .  .
   all was still, all was grey
"#;

const SCENE_AGES: &str = r#"
   |  |  |  |  |  |  |  |
  .:..:..:..:..:..:..:..:.
   |  |  |  |  |  |  |  |
     sand over the stones
"#;

const SCENE_WAKE: &str = r#"
        .-""""-.
       /        \
      |  -    -  |
      |    __    |
       \        /
        '-....-'
"#;

/// The scripted intro, in play order.
pub const CUTSCENES: [Cutscene; 3] = [
    Cutscene {
        art: SCENE_STONE,
        text: "The world turned to stone...",
    },
    Cutscene {
        art: SCENE_AGES,
        text: "Thousands of years passed...",
    },
    Cutscene {
        art: SCENE_WAKE,
        text: "You wake up alone...",
    },
];

/// Boot-sequence lines, printed with a pause between each.
pub const BOOT_LINES: [&str; 5] = [
    "Booting Natura Survival Console...",
    "Loading system files...",
    "Initializing hardware...",
    "Starting services...",
    "System ready.",
];

/// Banner printed when the prompt loop starts.
pub fn banner() -> String {
    format!(
        "{} [Version {}]\n(c) Natura Foundation. All rights reserved.\n",
        SYSTEM_NAME, SYSTEM_VERSION
    )
}
