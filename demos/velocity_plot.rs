use std::error::Error;

use gnuplot::*;
use scurve_velocity::{BoundaryState, LimitSet, VelocityStep1};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // RUST_LOG=scurve_velocity=trace shows every accepted candidate
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // -----------------------
    // 1. Set up parameters
    // -----------------------
    let start = BoundaryState::new(-1.0, 4.0); // Moving backwards, already accelerating
    let end = BoundaryState::new(12.0, -2.0); // Target velocity, easing off at the end

    // Motion limits
    let limits = LimitSet::try_new(10.0, -6.0, 40.0)?;

    // ---------------------
    // 2. Solve the profile
    // ---------------------
    let block = VelocityStep1::new(start, end, limits).get_profile()?;
    let profile = block.selected_profile;

    println!(
        "Minimum duration {:.4} s ({:?}, {:?})",
        block.t_min, profile.limits, profile.control_signs
    );
    for interval in block.extra_intervals() {
        println!("Blocked durations: {:.4} s .. {:.4} s", interval.left, interval.right);
    }

    // -------------------------
    // 3. Sample the profile
    // -------------------------
    let sampling_rate = 1000.0; // points per second
    let num_points = (sampling_rate * block.t_min).ceil() as usize + 1;

    let mut time_axis = Vec::with_capacity(num_points);
    let mut positions = Vec::with_capacity(num_points);
    let mut velocities = Vec::with_capacity(num_points);
    let mut accelerations = Vec::with_capacity(num_points);

    for i in 0..num_points {
        let t = i as f64 / sampling_rate;
        let state = profile.state_at(t);
        time_axis.push(t);
        positions.push(state.pos);
        velocities.push(state.vel);
        accelerations.push(state.acc);
    }

    // --------------
    // 4. Plot data
    // --------------
    let mut fg = Figure::new();
    {
        let axes = fg.axes2d();
        axes.set_title("Displacement, Velocity, Acceleration vs. Time", &[]);
        axes.set_x_label("Time (s)", &[]);
        axes.set_y_label("Position derivatives", &[]);
        axes.lines(&time_axis, &positions, &[Color("blue"), Caption("Displacement")]);
        axes.lines(&time_axis, &velocities, &[Color("red"), Caption("Velocity")]);
        axes.lines(&time_axis, &accelerations, &[Color("green"), Caption("Acceleration")]);
    }

    // Attempt to show in a pop-up window (might require gnuplot installed)
    fg.show().map_err(|e| format!("Failed to display plot: {e}"))?;
    Ok(())
}
