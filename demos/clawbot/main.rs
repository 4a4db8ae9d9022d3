use clawbot_driver::{
    fs::logger,
    opcontrol::{CancelToken, VexTicker},
};
use log::{LevelFilter, error};
use vexide::prelude::*;

pub mod hardware;

struct Clawbot {
    robot: hardware::Robot,
    token: CancelToken,
}

impl Compete for Clawbot {
    async fn disabled(&mut self) { self.token.cancel(); }

    async fn autonomous(&mut self) { self.token.cancel(); }

    async fn driver(&mut self) {
        // Every driver period gets a fresh token; re-enabling never resumes.
        self.token = CancelToken::new();
        let token = self.token.clone();
        self.robot.driver.run(&token, &mut VexTicker).await;
    }
}

#[vexide::main]
async fn main(peripherals: Peripherals) {
    if let Err(e) = logger::init(LevelFilter::Info) {
        println!("Logger Init Error: {}", e);
    }

    let robot = match hardware::Robot::default_config(peripherals) {
        Ok(robot) => robot,
        Err(e) => {
            error!("Invalid driver configuration: {}", e);
            return;
        }
    };

    Clawbot {
        robot,
        token: CancelToken::new(),
    }
    .compete()
    .await;
}
