pub mod kinematics;
pub mod model;
pub mod transform;

use gfx_maths::*;
use log::{debug, info};

use crate::core::clock::SceneClock;
use crate::core::config::SceneConfig;
use crate::graphics::{BufferHandle, GraphicsBackend, GraphicsError, GraphicsResult};
use crate::mesh::{GearSpec, HandSpec};

use self::kinematics::{
    HOUR_HAND_DEG_PER_SEC, MARKER_COUNT, MINUTE_HAND_DEG_PER_SEC, SECOND_HAND_DEG_PER_SEC,
};
use self::model::{GearModel, HandModel};
use self::transform::Transform;

fn gear_color() -> Vec4 {
    Vec4::new(0.65, 0.65, 0.7, 1.0)
}

fn hand_color() -> Vec4 {
    Vec4::new(0.1, 0.1, 0.1, 1.0)
}

fn marker_color() -> Vec4 {
    Vec4::new(0.2, 0.2, 0.25, 1.0)
}

/// The whole clock scene: two meshed gears, three hands, one marker mesh
/// drawn twelve times, and the clock that drives them. All state lives here;
/// nothing is reached through globals.
pub struct Scene {
    pub clock: SceneClock,
    pub driver: GearModel,
    pub driven: GearModel,
    pub second_hand: HandModel,
    pub minute_hand: HandModel,
    pub hour_hand: HandModel,
    pub marker: HandModel,
    phase_deg: f32,
    driven_position: Vec3,
    marker_radius: f32,
}

impl Scene {
    /// Builds every mesh once. Reset and pause never touch the meshes again.
    pub fn new(config: &SceneConfig) -> Self {
        let g = &config.driver_gear;
        let driver_spec = GearSpec::new(g.outer_radius, g.inner_radius, g.teeth, g.rpm);
        let g = &config.driven_gear;
        let driven_spec = GearSpec::driven_by(&driver_spec, g.outer_radius, g.inner_radius, g.teeth);

        // tooth circles tangent along +X
        let driven_position = Vec3::new(
            driver_spec.outer_radius + driven_spec.outer_radius,
            0.0,
            0.0,
        );

        let hand = |c: crate::core::config::HandConfig| HandSpec::new(c.length, c.thickness);

        Self {
            clock: SceneClock::new(),
            driver: GearModel::new(driver_spec, gear_color()),
            driven: GearModel::new(driven_spec, gear_color()),
            second_hand: HandModel::new(hand(config.second_hand), hand_color()),
            minute_hand: HandModel::new(hand(config.minute_hand), hand_color()),
            hour_hand: HandModel::new(hand(config.hour_hand), hand_color()),
            marker: HandModel::new(hand(config.marker), marker_color()),
            phase_deg: config.phase_deg,
            driven_position,
            // markers ring the dial on the driver gear's inner radius
            marker_radius: driver_spec.inner_radius,
        }
    }

    /// Uploads every mesh to the backend. Idempotent.
    pub fn load(&mut self, backend: &mut dyn GraphicsBackend) -> GraphicsResult<()> {
        self.driver.upload(backend)?;
        self.driven.upload(backend)?;
        self.second_hand.upload(backend)?;
        self.minute_hand.upload(backend)?;
        self.hour_hand.upload(backend)?;
        self.marker.upload(backend)?;
        info!(
            "scene loaded: driver {} teeth at {} rpm, driven {} teeth at {} rpm",
            self.driver.spec.teeth, self.driver.spec.rpm, self.driven.spec.teeth,
            self.driven.spec.rpm
        );
        Ok(())
    }

    /// Releases every buffer pair. Idempotent.
    pub fn unload(&mut self, backend: &mut dyn GraphicsBackend) -> GraphicsResult<()> {
        self.driver.release(backend)?;
        self.driven.release(backend)?;
        self.second_hand.release(backend)?;
        self.minute_hand.release(backend)?;
        self.hour_hand.release(backend)?;
        self.marker.release(backend)?;
        debug!("scene unloaded");
        Ok(())
    }

    /// Advances simulation time by a frame delta (no-op while paused).
    pub fn update(&mut self, delta: f32) {
        self.clock.advance(delta);
    }

    /// Issues one draw per object in fixed order: driver gear, driven gear,
    /// second, minute and hour hand, then the twelve hour markers.
    pub fn render(&self, backend: &mut dyn GraphicsBackend) -> GraphicsResult<()> {
        let t = self.clock.elapsed();

        Self::draw(
            backend,
            self.driver.handle(),
            kinematics::gear_transform(t, &self.driver.spec, Vec3::zero()),
        )?;
        Self::draw(
            backend,
            self.driven.handle(),
            kinematics::gear_transform(t, &self.driven.spec, self.driven_position),
        )?;

        for (hand, rate) in [
            (&self.second_hand, SECOND_HAND_DEG_PER_SEC),
            (&self.minute_hand, MINUTE_HAND_DEG_PER_SEC),
            (&self.hour_hand, HOUR_HAND_DEG_PER_SEC),
        ] {
            Self::draw(
                backend,
                hand.handle(),
                kinematics::hand_transform(t, rate, self.phase_deg),
            )?;
        }

        for index in 0..MARKER_COUNT {
            Self::draw(
                backend,
                self.marker.handle(),
                kinematics::marker_transform(index, self.marker_radius, self.phase_deg),
            )?;
        }

        Ok(())
    }

    fn draw(
        backend: &mut dyn GraphicsBackend,
        handle: Option<BufferHandle>,
        transform: Transform,
    ) -> GraphicsResult<()> {
        let handle =
            handle.ok_or_else(|| GraphicsError::Other(anyhow::anyhow!("scene not loaded")))?;
        backend.set_model_matrix(transform.get_model_matrix())?;
        backend.draw_indexed(handle)
    }
}
