//! The classic two-state toggle, walked forwards and then navigated back.
//!
//! Run with: cargo run --example toggle

use waypoint::{fsm_config, Config, Fsm, FsmError};

fn main() -> Result<(), FsmError<String, String>> {
    let config: Config<String, String> = fsm_config! {
        initial: "off",
        states: {
            "off" => { "toggle" => "on" },
            "on" => { "toggle" => "off" },
        }
    };

    let mut fsm = Fsm::new(config);
    println!("start:        {}", fsm.state());

    fsm.trigger("toggle")?;
    println!("after toggle: {}", fsm.state());

    fsm.trigger("toggle")?;
    println!("after toggle: {}", fsm.state());

    while fsm.undo() {
        println!("undo:         {}", fsm.state());
    }
    println!("undo again:   {} (undo returned false)", fsm.state());

    while fsm.redo() {
        println!("redo:         {}", fsm.state());
    }

    Ok(())
}
