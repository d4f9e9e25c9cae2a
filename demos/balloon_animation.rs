//! Balloon Animation
//!
//! This example drives the stock balloon/hand/line animation from a JSON
//! description.
//!
//! Key concepts:
//! - Decoding untrusted action descriptions with fallback
//! - Binding actions to live regions once
//! - Firing a transition's actions until the balloon pops
//! - Dumping an action set for debugging
//!
//! Run with: cargo run --example balloon_animation

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use stagehand::action::{ActionSet, ExecutionContext, FiringEvent};
use stagehand::config::EffectConfig;
use stagehand::core::{BasicRegion, Region, RegionRegistry};
use stagehand::decode::ReportingValidator;
use stagehand::diagnostics::{LogDiagnostics, StdoutSink};

fn main() {
    println!("=== Balloon Animation ===\n");

    let config = EffectConfig::default();
    let mut regions = RegionRegistry::new();
    let balloon = regions.insert(BasicRegion::new("balloon", config.balloon_rest));
    let hand = regions.insert(BasicRegion::new("hand", config.hand_rest));
    regions.insert(BasicRegion::new("line", config.line_rest));

    let pump_description = json!([
        { "act": "balloon_bigger", "region": "balloon", "param": config.boom_image },
        { "act": "hand_move", "region": "hand" },
        { "act": "line_shorter", "region": "line" },
    ]);
    let reset_description = json!([
        { "act": "balloon_rest", "region": "balloon" },
        { "act": "clear_image", "region": "balloon" },
        { "act": "hand_rest", "region": "hand" },
        { "act": "line_rest", "region": "line" },
        { "act": "print_event", "param": "reset by" },
        // Unknown effects decode to inert `none` actions
        { "act": "confetti", "region": "balloon" },
    ]);

    // Problems in description data go to the log, not to the console
    let mut reporter = LogDiagnostics;
    let mut pump = ActionSet::decode(&pump_description, &mut ReportingValidator::new(&mut reporter));
    let mut reset =
        ActionSet::decode(&reset_description, &mut ReportingValidator::new(&mut reporter));

    let unresolved = pump.bind_all(regions.handles(), &mut reporter)
        + reset.bind_all(regions.handles(), &mut reporter);
    println!("Bound {} + {} actions, {unresolved} unresolved\n", pump.len(), reset.len());

    let mut output = StdoutSink;
    let mut rng = StdRng::seed_from_u64(7);

    println!("Pumping:");
    let mut pumps = 0;
    while balloon.borrow().image_loc() != config.boom_image {
        let mut ctx = ExecutionContext::new(&mut output, &mut rng, &config);
        pump.fire(&FiringEvent::new("pump"), &mut ctx);
        pumps += 1;
        if pumps % 10 == 0 {
            println!("  after {pumps:3} pumps: {}", balloon.borrow().debug_string());
        }
    }
    println!("  popped after {pumps} pumps: {}\n", balloon.borrow().debug_string());

    println!("Resetting:");
    {
        let mut ctx = ExecutionContext::new(&mut output, &mut rng, &config);
        reset.fire(&FiringEvent::from_region("mouse_up", &hand), &mut ctx);
    }
    println!("  {}\n", balloon.borrow().debug_string());

    println!("Pump actions:");
    pump.dump(&mut output);
    println!("\nReset actions:");
    reset.dump(&mut output);

    println!("\n=== Example Complete ===");
}
