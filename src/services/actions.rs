use rand_core::RngCore;

use crate::domain::{
    actions::{DrinkTeaAction, OrderPizzaAction, PlayVideoGameAction},
    envelopes::CommandRequest,
};

const PIZZAS: [&str; 3] = ["Vegetariana", "Margherita", "Funghi"];
const VIDEO_GAMES: [&str; 3] = ["WOW", "AOE II: AOK", "Candy Crap"];
const TEA_REGIONS: [&str; 3] = ["Turkish Black Sea", "India", "Africa"];

const MAX_PIZZAS: u32 = 10;
const MAX_PLAYERS: u32 = 10;
const MAX_TEA_TEMPERATURE: u32 = 80;

/// Builds the randomized requests behind the three demo buttons.
pub struct ActionPicker<R: RngCore> {
    rng: R,
}

impl<R: RngCore> ActionPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn pick<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options[self.rng.next_u32() as usize % options.len()]
    }

    fn between_one_and(&mut self, max: u32) -> u32 {
        self.rng.next_u32() % max + 1
    }

    pub fn order_pizza(&mut self) -> CommandRequest {
        CommandRequest::new(OrderPizzaAction {
            pizza_name: self.pick(&PIZZAS).into(),
            count: self.between_one_and(MAX_PIZZAS),
        })
    }

    pub fn play_video_game(&mut self) -> CommandRequest {
        CommandRequest::new(PlayVideoGameAction {
            video_game_name: self.pick(&VIDEO_GAMES).into(),
            players: self.between_one_and(MAX_PLAYERS),
        })
    }

    pub fn drink_tea(&mut self) -> CommandRequest {
        CommandRequest::new(DrinkTeaAction {
            region: self.pick(&TEA_REGIONS).into(),
            temperature: self.between_one_and(MAX_TEA_TEMPERATURE) as i32,
        })
    }
}
