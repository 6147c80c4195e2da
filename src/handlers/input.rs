use std::str::FromStr;

use anyhow::{anyhow, Result};
use rand_core::RngCore;

use crate::services::{
    actions::ActionPicker,
    connection::{Connection, SendOutcome},
};

pub const USAGE: &str = "Commands: pizza (p), game (g), tea (t), quit (q)";

/// Terminal stand-ins for the buttons on the demo page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    OrderPizza,
    PlayVideoGame,
    DrinkTea,
    Quit,
}

impl FromStr for Trigger {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pizza" | "p" => Ok(Trigger::OrderPizza),
            "game" | "g" => Ok(Trigger::PlayVideoGame),
            "tea" | "t" => Ok(Trigger::DrinkTea),
            "quit" | "q" => Ok(Trigger::Quit),
            other => Err(anyhow!("Unrecognised command: {other:?}")),
        }
    }
}

/// Build and send the request behind `trigger`. Quit is handled by the caller.
pub fn dispatch<R: RngCore>(
    trigger: Trigger,
    picker: &mut ActionPicker<R>,
    connection: &Connection,
) -> Result<Option<SendOutcome>> {
    let request = match trigger {
        Trigger::OrderPizza => picker.order_pizza(),
        Trigger::PlayVideoGame => picker.play_video_game(),
        Trigger::DrinkTea => picker.drink_tea(),
        Trigger::Quit => return Ok(None),
    };
    log::debug!("Sending {:?}", request);
    let outcome = connection.send(&request)?;
    Ok(Some(outcome))
}
