//! The interface to the matrix scanner. Scanning and debouncing belong to the host firmware; it
//! sends a [ScanKey] for every debounced switch change.

use embassy_sync::{blocking_mutex::raw::RawMutex, channel::Channel};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanKey {
    row: u8,
    col: u8,
}
impl ScanKey {
    pub fn new(row: u8, col: u8, is_down: bool) -> Self {
        Self {
            row: row | if is_down { 0x80 } else { 0 },
            col,
        }
    }

    pub fn row(&self) -> usize {
        (self.row & 0x7f) as usize
    }

    pub fn column(&self) -> usize {
        self.col as usize
    }

    pub fn is_down(&self) -> bool {
        self.row & 0x80 == 0x80
    }
}

pub struct KeyScannerChannel<M: RawMutex, const N: usize>(Channel<M, ScanKey, N>);
impl<M: RawMutex, const N: usize> Default for KeyScannerChannel<M, N> {
    fn default() -> Self {
        Self(Channel::new())
    }
}
impl<M: RawMutex, const N: usize> KeyScannerChannel<M, N> {
    pub async fn receive(&self) -> ScanKey {
        self.0.receive().await
    }

    /// Queue a switch change; dropped if the mapper has fallen `N` events behind.
    pub fn try_send(&self, msg: ScanKey) -> bool {
        if self.0.try_send(msg).is_err() {
            crate::warn!("scan channel full; dropped {:?}", msg);
            false
        } else {
            true
        }
    }
}

#[cfg(test)]
#[path = "key_scanner_test.rs"]
mod test;
