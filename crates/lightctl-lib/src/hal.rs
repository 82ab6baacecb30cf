//! HAL surface — open a logical light by name, set its state, close it.
//!
//! Dispatch is resolved once per open from the caller-supplied identifier;
//! per-call work never re-parses the name.

use crate::arbiter::LightsRegistry;
use crate::backlight::{self, ExtBacklight};
use crate::config::Config;
use crate::error::{LightctlError, Result};
use crate::paths::LightPaths;
use crate::state::{LightId, LightState};
use crate::sysfs::SysfsLights;

/// One HAL instance per process: owns the registry, the actuator backend,
/// the optional vendor brightness collaborator, and the open-time config.
///
/// Share across caller threads via `Arc`; the registry's single lock
/// serializes every update end to end.
pub struct LightsHal<B: SysfsLights> {
    registry: LightsRegistry,
    lights: B,
    paths: LightPaths,
    ext: Option<Box<dyn ExtBacklight>>,
    config: Config,
}

impl<B: SysfsLights> LightsHal<B> {
    pub fn new(lights: B, paths: LightPaths, config: Config) -> Self {
        LightsHal {
            registry: LightsRegistry::new(),
            lights,
            paths,
            ext: None,
            config,
        }
    }

    /// Install the vendor extended-brightness collaborator.
    ///
    /// Only consulted when the config enables the extended backlight model.
    pub fn with_extended(mut self, ext: Box<dyn ExtBacklight>) -> Self {
        self.ext = Some(ext);
        self
    }

    /// Open a logical light by its caller-supplied name.
    ///
    /// Unknown names are rejected before any state is touched.
    pub fn open(&self, name: &str) -> Result<LightHandle<'_, B>> {
        let id: LightId = name
            .parse()
            .map_err(|_| LightctlError::UnknownLight(name.to_string()))?;
        Ok(self.open_id(id))
    }

    /// Open a logical light by ID. The backlight hardware model is fixed
    /// here, once per open, from the configuration.
    pub fn open_id(&self, id: LightId) -> LightHandle<'_, B> {
        let target = match id {
            LightId::Backlight => {
                if self.config.extended_backlight {
                    match &self.ext {
                        Some(ext) => {
                            ext.init();
                            Target::BacklightExtended(ext.as_ref())
                        }
                        None => {
                            log::warn!(
                                "extended backlight enabled but no vendor primitive installed; \
                                 using direct model"
                            );
                            Target::BacklightDirect
                        }
                    }
                } else {
                    Target::BacklightDirect
                }
            }
            LightId::Battery => Target::Battery,
            LightId::Notifications => Target::Notifications,
            LightId::Attention => Target::Attention,
        };
        LightHandle {
            hal: self,
            id,
            target,
        }
    }

    pub fn registry(&self) -> &LightsRegistry {
        &self.registry
    }

    pub fn lights(&self) -> &B {
        &self.lights
    }

    pub fn paths(&self) -> &LightPaths {
        &self.paths
    }
}

enum Target<'hal> {
    BacklightDirect,
    BacklightExtended(&'hal dyn ExtBacklight),
    Battery,
    Notifications,
    Attention,
}

/// An opened logical light.
pub struct LightHandle<'hal, B: SysfsLights> {
    hal: &'hal LightsHal<B>,
    id: LightId,
    target: Target<'hal>,
}

impl<B: SysfsLights> std::fmt::Debug for LightHandle<'_, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LightHandle")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl<B: SysfsLights> LightHandle<'_, B> {
    pub fn id(&self) -> LightId {
        self.id
    }

    /// Apply a new state to this light.
    ///
    /// Indicator updates are always recorded; their LED write failures are
    /// logged, not returned. Backlight updates propagate write failures.
    pub fn set(&self, state: &LightState) -> Result<()> {
        let hal = self.hal;
        match self.target {
            Target::BacklightDirect => {
                backlight::set_backlight(&hal.registry, &hal.lights, &hal.paths, state)
                    .map_err(Into::into)
            }
            Target::BacklightExtended(ext) => backlight::set_backlight_ext(
                &hal.registry,
                ext,
                hal.config.max_brightness,
                state,
            )
            .map_err(Into::into),
            Target::Battery => {
                hal.registry.set_battery(&hal.lights, &hal.paths, state);
                Ok(())
            }
            Target::Notifications => {
                hal.registry
                    .set_notifications(&hal.lights, &hal.paths, state);
                Ok(())
            }
            Target::Attention => {
                hal.registry.set_attention(&hal.lights, &hal.paths, state);
                Ok(())
            }
        }
    }

    /// Release the handle. Consuming, so a closed handle cannot be reused.
    pub fn close(self) {}
}
