use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use clap::Parser;

use skirmish_sim::game::resources::{BattleClock, BattleConfig, BattleRng};
use skirmish_sim::states::BattleState;
use skirmish_sim::{audio, combat, effects, game, movement, projectile, unit, visibility};

/// Headless skirmish battle simulator
#[derive(Parser, Debug)]
#[command(name = "skirmish-sim")]
struct Args {
    /// RNG seed, the same seed replays the same battle
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Units per squad
    #[arg(long, default_value_t = 3)]
    squad_size: usize,

    /// Simulation tick rate in Hz
    #[arg(long, default_value_t = 60.0)]
    tick_hz: f64,

    /// Battle length cap in seconds
    #[arg(long, default_value_t = 90.0)]
    max_secs: f32,

    /// Play battle sounds (needs an audio device)
    #[arg(long)]
    audio: bool,
}

fn main() {
    let args = Args::parse();

    let mut app = App::new();
    app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
        Duration::from_secs_f64(1.0 / args.tick_hz),
    )))
    .add_plugins((LogPlugin::default(), StatesPlugin));

    if args.audio {
        app.add_plugins((AssetPlugin::default(), bevy_kira_audio::AudioPlugin));
        audio::register_channels(&mut app);
    }

    app.init_state::<BattleState>()
        .insert_resource(BattleRng::from_seed(args.seed))
        .insert_resource(BattleConfig {
            squad_size: args.squad_size,
            max_secs: args.max_secs,
            ..Default::default()
        })
        .insert_resource(BattleClock::with_limit(args.max_secs))
        .add_plugins((
            game::plugin,
            combat::plugin,
            unit::plugin,
            movement::plugin,
            projectile::plugin,
            visibility::plugin,
            effects::plugin,
            audio::plugin,
        ))
        .run();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["skirmish-sim"]);
        assert_eq!(args.seed, 42);
        assert_eq!(args.squad_size, 3);
        assert_eq!(args.tick_hz, 60.0);
        assert_eq!(args.max_secs, 90.0);
    }

    #[test]
    fn test_prelude_exposes_core_types() {
        use skirmish_sim::prelude::*;

        let _unit = Unit;
        let health = Health::new(50);
        assert_eq!(health.current, 50);
        assert_eq!(Hitbox::default().radius(), 0.75);
        assert_eq!(BattleState::default(), BattleState::Setup);
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::parse_from([
            "skirmish-sim",
            "--seed",
            "7",
            "--squad-size",
            "5",
            "--max-secs",
            "30",
        ]);
        assert_eq!(args.seed, 7);
        assert_eq!(args.squad_size, 5);
        assert_eq!(args.max_secs, 30.0);
    }
}
