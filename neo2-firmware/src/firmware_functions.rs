//! Functions the host firmware supplies to the keymap.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::CriticalSectionMutex;

pub type ResetFn = &'static (dyn Fn() + Sync);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FirmwareError {
    /// No handler has been registered for the requested function.
    Unsupported,
}

struct Functions {
    reset_to_usb_boot: Option<ResetFn>,
}

const fn default_functions() -> Functions {
    Functions {
        reset_to_usb_boot: None,
    }
}

static FUNCTIONS: CriticalSectionMutex<RefCell<Functions>> =
    CriticalSectionMutex::new(RefCell::new(default_functions()));

/// Hand control to the bootloader using the registered handler.
///
/// The handler is called outside the lock. A handler that returns means the jump did not happen,
/// which is reported as `Ok` so the caller can log it.
pub fn reset_to_usb_boot() -> Result<(), FirmwareError> {
    let handler = FUNCTIONS.lock(|r| r.borrow().reset_to_usb_boot);
    match handler {
        Some(f) => {
            f();
            Ok(())
        }
        None => Err(FirmwareError::Unsupported),
    }
}

/// Register the function that enters the bootloader when [reset_to_usb_boot] is called.
///
/// ```
/// use neo2_firmware::firmware_functions::handle_reset_to_usb_boot;
/// # pub mod teensy { pub fn bootloader() {} }
///
/// fn jump() {
///     teensy::bootloader();
/// }
///
/// handle_reset_to_usb_boot(Some(&jump));
/// ```
pub fn handle_reset_to_usb_boot(value: Option<ResetFn>) {
    FUNCTIONS.lock(|r| {
        let mut guard = r.borrow_mut();
        guard.reset_to_usb_boot = value;
    });
}

#[cfg(test)]
extern crate std;

/// Held by tests that register or rely on the absence of a handler.
#[cfg(test)]
pub(crate) static HANDLER_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
#[path = "firmware_functions_test.rs"]
mod test;
