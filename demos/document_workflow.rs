//! An editorial workflow: draft → review → published, with rejections,
//! undo/redo navigation, and a history reset.
//!
//! Run with: cargo run --example document_workflow

use waypoint::{Config, Fsm};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config: Config<String, String> = Config::builder()
        .states([
            "draft".to_string(),
            "review".to_string(),
            "published".to_string(),
        ])
        .initial("draft".to_string())
        .transition("draft".to_string(), "submit".to_string(), "review".to_string())
        .transition("review".to_string(), "approve".to_string(), "published".to_string())
        .transition("review".to_string(), "reject".to_string(), "draft".to_string())
        .build()?;

    let mut fsm = Fsm::new(config);

    println!("states that accept `submit`: {:?}", fsm.states_for("submit"));

    fsm.trigger("submit")?;
    fsm.trigger("reject")?;
    fsm.trigger("submit")?;
    fsm.trigger("approve")?;
    println!("path: {:?}", fsm.history());

    // Walk back to the second review and take the other branch.
    fsm.undo();
    println!("after undo: {}", fsm.state());

    fsm.trigger("reject")?;
    println!("redo available after new transition: {}", fsm.can_redo());
    println!("path: {:?}", fsm.history());

    // Start a fresh session from the current position.
    fsm.clear_history();
    println!(
        "after clear_history: state={} history={:?}",
        fsm.state(),
        fsm.history()
    );

    Ok(())
}
