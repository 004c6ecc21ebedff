//! Built-in ASCII art command

use async_trait::async_trait;

use super::{Command, Context};
use crate::error::Result;
use crate::interpreter::ExecResult;

const TREE: &str = r#"
   &&& &&  & &&
  && &\/&\|& ()|/ @, &&
  &\/(/&/&||/& /_/)_&/_&
&&() &\/&|()|/&\/ '%" & &&
&_\_&&_\ |& |&&/&__%_/_& &&
&&   && & &| &| /& & % ()& /&&
 ()&_---()&\&\|&&-&&--%---()~
     &&     \|||
             |||
             |||
             |||
       , -=-~  .-^- _
"#;

const SMILEY: &str = r#"
   _____
  /     \
 | () () |
  \  ^  /
   |||||
   |||||
"#;

/// The ascii command - print one of the built-in art pieces.
pub struct Ascii;

#[async_trait]
impl Command for Ascii {
    async fn execute(&self, ctx: Context<'_>) -> Result<ExecResult> {
        let Some(name) = ctx.args.first() else {
            return Ok(ExecResult::err("Usage: ascii [name]\n", 1));
        };

        match name.to_lowercase().as_str() {
            "tree" => Ok(ExecResult::ok(TREE)),
            "smiley" => Ok(ExecResult::ok(SMILEY)),
            _ => Ok(ExecResult::err(
                "No ascii art found with that name.\n",
                1,
            )),
        }
    }
}
