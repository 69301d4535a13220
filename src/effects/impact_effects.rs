use bevy::prelude::*;
use bevy_hanabi::prelude::*;
use bevy_hanabi::Gradient as HanabiGradient;

/// Resource containing particle effect handles for projectile impacts
#[derive(Resource)]
pub struct ImpactEffects {
    /// Dirt and dust kicked up when a projectile hits the ground
    pub ground_burst: Handle<EffectAsset>,
    /// Faint dissipation puff for projectiles that expire without a hit
    pub fizzle: Handle<EffectAsset>,
}

/// Rough hitbox scale the burst effects are sized against
const BURST_RADIUS: f32 = 0.75;

/// Creates the ground burst - dirt flying up and out from the impact point
pub fn create_ground_burst_effect(effects: &mut Assets<EffectAsset>) -> Handle<EffectAsset> {
    let mut color_gradient = HanabiGradient::<Vec4>::new();
    color_gradient.add_key(0.0, Vec4::new(0.45, 0.35, 0.22, 1.0)); // Dirt brown
    color_gradient.add_key(0.4, Vec4::new(0.35, 0.28, 0.18, 0.8));
    color_gradient.add_key(1.0, Vec4::new(0.25, 0.2, 0.15, 0.0)); // Settle and fade

    let mut size_gradient = HanabiGradient::<Vec3>::new();
    size_gradient.add_key(0.0, Vec3::splat(0.12));
    size_gradient.add_key(0.5, Vec3::splat(0.2));
    size_gradient.add_key(1.0, Vec3::splat(0.05));

    let writer = ExprWriter::new();

    let lifetime = writer.lit(0.6).expr();
    let init_lifetime = SetAttributeModifier::new(Attribute::LIFETIME, lifetime);

    // Spawn in a tight disc at the impact point
    let init_pos = SetPositionSphereModifier {
        center: writer.lit(Vec3::ZERO).expr(),
        radius: writer.lit(BURST_RADIUS * 0.3).expr(),
        dimension: ShapeDimension::Volume,
    };

    // Mostly-upward spray
    let init_vel = SetVelocitySphereModifier {
        center: writer.lit(Vec3::new(0.0, -1.0, 0.0)).expr(),
        speed: writer.lit(4.0).expr(),
    };

    let gravity = AccelModifier::new(writer.lit(Vec3::new(0.0, -9.8, 0.0)).expr());
    let drag = LinearDragModifier::new(writer.lit(1.5).expr());

    let effect = EffectAsset::new(
        128,
        SpawnerSettings::burst(40.0.into(), 1.0.into()),
        writer.finish(),
    )
    .with_name("impact_ground_burst")
    .with_simulation_space(SimulationSpace::Global)
    .init(init_lifetime)
    .init(init_pos)
    .init(init_vel)
    .update(gravity)
    .update(drag)
    .render(ColorOverLifetimeModifier {
        gradient: color_gradient,
        blend: ColorBlendMode::Overwrite,
        mask: ColorBlendMask::RGBA,
    })
    .render(SizeOverLifetimeModifier {
        gradient: size_gradient,
        screen_space_size: false,
    });

    effects.add(effect)
}

/// Creates the fizzle puff - a faint gray wisp for hits that landed on nothing
pub fn create_fizzle_effect(effects: &mut Assets<EffectAsset>) -> Handle<EffectAsset> {
    let mut color_gradient = HanabiGradient::<Vec4>::new();
    color_gradient.add_key(0.0, Vec4::new(0.6, 0.6, 0.6, 0.6));
    color_gradient.add_key(1.0, Vec4::new(0.5, 0.5, 0.5, 0.0));

    let mut size_gradient = HanabiGradient::<Vec3>::new();
    size_gradient.add_key(0.0, Vec3::splat(0.1));
    size_gradient.add_key(1.0, Vec3::splat(0.3)); // Expands as it dissipates

    let writer = ExprWriter::new();

    let lifetime = writer.lit(0.5).expr();
    let init_lifetime = SetAttributeModifier::new(Attribute::LIFETIME, lifetime);

    let init_pos = SetPositionSphereModifier {
        center: writer.lit(Vec3::ZERO).expr(),
        radius: writer.lit(BURST_RADIUS * 0.2).expr(),
        dimension: ShapeDimension::Volume,
    };

    let init_vel = SetVelocitySphereModifier {
        center: writer.lit(Vec3::ZERO).expr(),
        speed: writer.lit(0.8).expr(),
    };

    let rise = AccelModifier::new(writer.lit(Vec3::new(0.0, 0.5, 0.0)).expr());

    let effect = EffectAsset::new(
        32,
        SpawnerSettings::burst(10.0.into(), 1.0.into()),
        writer.finish(),
    )
    .with_name("impact_fizzle")
    .with_simulation_space(SimulationSpace::Global)
    .init(init_lifetime)
    .init(init_pos)
    .init(init_vel)
    .update(rise)
    .render(ColorOverLifetimeModifier {
        gradient: color_gradient,
        blend: ColorBlendMode::Overwrite,
        mask: ColorBlendMask::RGBA,
    })
    .render(SizeOverLifetimeModifier {
        gradient: size_gradient,
        screen_space_size: false,
    });

    effects.add(effect)
}

/// Initialize the ImpactEffects resource.
/// Uses Option to handle headless runs that don't have the HanabiPlugin.
pub fn init_impact_effects(
    mut commands: Commands,
    effects: Option<ResMut<Assets<EffectAsset>>>,
) {
    if let Some(mut effects) = effects {
        let impact_effects = ImpactEffects {
            ground_burst: create_ground_burst_effect(&mut effects),
            fizzle: create_fizzle_effect(&mut effects),
        };
        commands.insert_resource(impact_effects);
    }
}
