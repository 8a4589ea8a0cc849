//! Orientation input selection and the permission state machine.
//!
//! Some platforms (iOS Safari) require an explicit permission request before
//! `deviceorientation` events are delivered. The gate tracks that request so
//! the front-end attaches its listener at most once.

use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Pointer,
    Orientation,
}

/// Orientation only when asked for and available; pointer otherwise.
#[inline]
pub fn select_input_mode(use_gyroscope: bool, orientation_supported: bool) -> InputMode {
    if use_gyroscope && orientation_supported {
        InputMode::Orientation
    } else {
        InputMode::Pointer
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum PermissionState {
    #[default]
    NotRequested,
    Pending,
    Granted,
    Denied(String),
}

#[derive(Clone, Debug, Default)]
pub struct PermissionGate {
    state: PermissionState,
}

impl PermissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> &PermissionState {
        &self.state
    }

    #[inline]
    pub fn is_granted(&self) -> bool {
        self.state == PermissionState::Granted
    }

    /// Start an explicit request. Returns `false` if one is already pending
    /// or permission was granted, in which case nothing should be issued.
    pub fn begin_request(&mut self) -> bool {
        match self.state {
            PermissionState::Pending | PermissionState::Granted => false,
            PermissionState::NotRequested | PermissionState::Denied(_) => {
                self.state = PermissionState::Pending;
                true
            }
        }
    }

    /// Platform grants access without asking. Returns `true` when the
    /// listener should be attached now.
    pub fn grant_without_prompt(&mut self) -> bool {
        if self.is_granted() {
            return false;
        }
        self.state = PermissionState::Granted;
        true
    }

    /// Settle a pending request with the platform's answer (`"granted"`,
    /// `"denied"`, ...). Returns `true` when the listener should be attached.
    pub fn resolve(&mut self, response: &str) -> bool {
        if self.state != PermissionState::Pending {
            log::debug!("[gyro] ignoring response {:?} in state {:?}", response, self.state);
            return false;
        }
        if response == "granted" {
            self.state = PermissionState::Granted;
            true
        } else {
            self.reject("DeviceOrientationEvent not granted");
            false
        }
    }

    /// The request failed (promise rejected or answer not granted).
    pub fn reject(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        log::warn!("[gyro] {}", reason);
        self.state = PermissionState::Denied(reason);
    }
}

/// Callback re-triggering the permission request.
pub type RetryFn = Rc<dyn Fn()>;

/// Host-supplied affordance shown while orientation permission is missing.
pub trait PermissionPrompt {
    fn show(&self, retry: RetryFn);
    fn hide(&self);
}

/// Prompt that renders nothing.
pub struct NoPrompt;

impl PermissionPrompt for NoPrompt {
    fn show(&self, _retry: RetryFn) {}
    fn hide(&self) {}
}

/// Show the prompt while ungranted, hide it once granted.
pub fn sync_prompt(gate: &PermissionGate, prompt: &dyn PermissionPrompt, retry: RetryFn) {
    if gate.is_granted() {
        prompt.hide();
    } else {
        prompt.show(retry);
    }
}
