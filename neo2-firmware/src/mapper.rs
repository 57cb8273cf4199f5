use embassy_futures::select::{select, Either};
use embassy_sync::{
    blocking_mutex::raw::{NoopRawMutex, RawMutex},
    channel::Channel,
    signal::Signal,
};
use macros::{MacroEvent, MacroPlayer};
use neo2_common::{
    globals::{BOOTLOADER_DELAY_MS, MAX_LAYERS},
    keycodes::KeyClass,
};

use crate::{
    action::{Action, HostFunction, LayerOp},
    dispatch::{self, DispatchContext},
    firmware_functions,
    key_scanner::{KeyScannerChannel, ScanKey},
    keymap::Keymap,
    layer_state::LayerState,
};

pub mod macros;

/// What the mapper asks the HID reporter to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEvent {
    Basic(u8, bool),
    /// Modifier bits that changed state together.
    Modifiers(u8, bool),
    Delay(u16),
    /// Release everything.
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlMessage {
    ClearAll,
    Exit,
}

#[derive(Default)]
pub struct ControlSignal(Signal<NoopRawMutex, ControlMessage>);
impl ControlSignal {
    /// Release every key and return to the base layer.
    pub fn clear_all(&self) {
        self.0.signal(ControlMessage::ClearAll);
    }

    pub fn exit(&self) {
        self.0.signal(ControlMessage::Exit);
    }

    #[cfg(test)]
    pub fn try_take(&self) -> Option<ControlMessage> {
        self.0.try_take()
    }
}

pub struct MapperChannel<M: RawMutex, const N: usize>(Channel<M, KeyEvent, N>, ControlSignal);
impl<M: RawMutex, const N: usize> Default for MapperChannel<M, N> {
    fn default() -> Self {
        Self(Channel::new(), ControlSignal::default())
    }
}
impl<M: RawMutex, const N: usize> MapperChannel<M, N> {
    pub async fn receive(&self) -> KeyEvent {
        self.0.receive().await
    }

    pub fn try_receive(&self) -> Option<KeyEvent> {
        self.0.try_receive().ok()
    }

    pub fn control(&self) -> &ControlSignal {
        &self.1
    }

    async fn wait_control(&self) -> ControlMessage {
        self.1 .0.wait().await
    }

    fn report(&self, message: KeyEvent) {
        if self.0.try_send(message).is_err() {
            crate::warn!("report channel full; clearing");
            self.clear_reports();
            let _ = self.0.try_send(KeyEvent::Clear);
        }
    }

    fn clear_reports(&self) {
        self.0.clear();
    }
}

/// Room for the longest macro expansion without overflowing the report channel.
const MIN_REPORT_BUFFER_SIZE: usize = 16;

const fn assert_sizes<
    const ROWS: usize,
    const COLS: usize,
    const LAYERS: usize,
    const REPORT_BUFFER_SIZE: usize,
>() -> bool {
    assert!(REPORT_BUFFER_SIZE >= MIN_REPORT_BUFFER_SIZE);
    assert!(ROWS < 0x80 && COLS < 0xff);
    assert!(LAYERS > 0 && LAYERS <= MAX_LAYERS);
    true
}

/// Turns [ScanKey]s into [KeyEvent]s using a [Keymap].
///
/// The mapper owns the layer state through its [DispatchContext] and remembers the action each
/// held key was pressed with, so a key is always released the way it was pressed even if the
/// layer changed meanwhile.
pub struct Mapper<
    'c,
    const ROWS: usize,
    const COLS: usize,
    const LAYERS: usize,
    M: RawMutex,
    const REPORT_BUFFER_SIZE: usize,
> {
    keymap: &'c Keymap<ROWS, COLS, LAYERS>,
    context: DispatchContext,
    active_actions: [[Action; COLS]; ROWS],
    modifier_count: [i8; 8],
    report_channel: &'c MapperChannel<M, REPORT_BUFFER_SIZE>,
}
impl<
        'c,
        const ROWS: usize,
        const COLS: usize,
        const LAYERS: usize,
        M: RawMutex,
        const REPORT_BUFFER_SIZE: usize,
    > Mapper<'c, ROWS, COLS, LAYERS, M, REPORT_BUFFER_SIZE>
{
    const OKAY: bool = assert_sizes::<ROWS, COLS, LAYERS, REPORT_BUFFER_SIZE>();
    pub fn new(
        keymap: &'c Keymap<ROWS, COLS, LAYERS>,
        report_channel: &'c MapperChannel<M, REPORT_BUFFER_SIZE>,
    ) -> Self {
        assert!(Self::OKAY);
        Self {
            keymap,
            context: DispatchContext::default(),
            active_actions: [[Action::No; COLS]; ROWS],
            modifier_count: Default::default(),
            report_channel,
        }
    }

    pub fn context(&self) -> &DispatchContext {
        &self.context
    }

    pub fn layer_state(&self) -> &LayerState {
        self.context.layer_state()
    }

    pub fn effective_layer(&self) -> u8 {
        self.context.effective_layer()
    }

    /// Release all keys and modifiers. The layer state is kept.
    fn clear_keyboard(&mut self) {
        for r in self.active_actions.iter_mut() {
            for c in r.iter_mut() {
                *c = Action::No;
            }
        }
        for m in self.modifier_count.iter_mut() {
            *m = 0;
        }
        self.report_channel.clear_reports();
        self.report(KeyEvent::Clear);
    }

    fn clear_all(&mut self) {
        self.clear_keyboard();
        self.context.layer_state_mut().clear();
    }

    /// Process key switch events until told to exit.
    pub async fn run<const SCANNER_BUFFER_SIZE: usize>(
        &mut self,
        key_scan_channel: &KeyScannerChannel<M, SCANNER_BUFFER_SIZE>,
    ) {
        loop {
            let event = select(
                key_scan_channel.receive(),
                self.report_channel.wait_control(),
            )
            .await;

            match event {
                Either::First(scan_key) => self.key_switch(scan_key),
                Either::Second(ControlMessage::ClearAll) => self.clear_all(),
                Either::Second(ControlMessage::Exit) => return,
            }
        }
    }

    pub fn key_switch(&mut self, k: ScanKey) {
        let (row, column) = (k.row(), k.column());
        if row >= ROWS || column >= COLS {
            crate::warn!("key out of range {:?}", k);
            return;
        }

        if k.is_down() {
            let action = self.action_at(row, column);
            self.active_actions[row][column] = action;
            self.run_action(action, true);
        } else {
            // A layer key is looked up again so the layer it entered can bind its release.
            let fresh = self.action_at(row, column);
            if fresh.is_layer() {
                self.run_action(fresh, false);
            }
            let pressed = core::mem::take(&mut self.active_actions[row][column]);
            if !pressed.is_layer() {
                self.run_action(pressed, false);
            }
        }
    }

    fn action_at(&self, row: usize, column: usize) -> Action {
        let code = self
            .keymap
            .find_code(self.context.layer_state(), row, column);
        match KeyClass::of(code) {
            KeyClass::Basic(_) | KeyClass::Modifier(_) => Action::Key(code),
            KeyClass::Function(index) => dispatch::resolve(self.keymap, &self.context, index),
            KeyClass::NoOp | KeyClass::Transparent => Action::No,
        }
    }

    fn run_action(&mut self, action: Action, is_down: bool) {
        match action {
            Action::No => {}
            Action::Key(code) => self.key(code, is_down),
            Action::ModsKey { mods, key } => {
                if is_down {
                    self.write_modifiers(mods, 1);
                    self.key(key, true);
                } else {
                    self.key(key, false);
                    self.write_modifiers(mods, -1);
                }
            }
            Action::Layer { op, layer, on } => {
                if on.fires(is_down) {
                    self.layer(op, layer);
                }
            }
            Action::Momentary(layer) => {
                self.layer(if is_down { LayerOp::On } else { LayerOp::Off }, layer);
            }
            Action::Macro(id) => {
                if is_down {
                    self.play_macro(id);
                }
            }
            Action::Function(id) => {
                if is_down {
                    self.host_function(id);
                }
            }
        }
    }

    fn key(&mut self, code: u16, is_down: bool) {
        match KeyClass::of(code) {
            KeyClass::Basic(kc8) => self.report(KeyEvent::Basic(kc8, is_down)),
            KeyClass::Modifier(bit) => self.write_modifiers(bit, if is_down { 1 } else { -1 }),
            _ => {
                crate::debug!("ignored keycode {}", code);
            }
        }
    }

    fn layer(&mut self, op: LayerOp, layer: u8) {
        self.context.layer_state_mut().apply(op, layer);
        crate::debug!(
            "layer {:?} {} -> {}",
            op,
            layer,
            self.context.effective_layer()
        );
    }

    fn play_macro(&mut self, id: u8) {
        let steps = self.keymap.macro_steps(id);
        if steps.is_empty() {
            crate::warn!("undefined macro {}", id);
            return;
        }
        for event in MacroPlayer::new(steps) {
            match event {
                MacroEvent::Press(code) => self.key(code, true),
                MacroEvent::Release(code) => self.key(code, false),
                MacroEvent::Delay(ms) => self.report(KeyEvent::Delay(ms)),
            }
        }
    }

    fn host_function(&mut self, id: u8) {
        match self.keymap.function(id) {
            Some(HostFunction::BootloaderJump) => self.bootloader_jump(),
            None => {
                crate::warn!("undefined function {}", id);
            }
        }
    }

    fn bootloader_jump(&mut self) {
        self.clear_keyboard();
        crate::info!("Jump to bootloader...");
        self.report(KeyEvent::Delay(BOOTLOADER_DELAY_MS));
        match firmware_functions::reset_to_usb_boot() {
            Ok(()) => {
                crate::warn!("bootloader jump returned; not supported");
            }
            Err(err) => {
                crate::warn!("bootloader jump not supported: {:?}", err);
            }
        }
    }

    /// Count each modifier's holders and report only the bits that cross between zero and one.
    fn write_modifiers(&mut self, modifiers: u8, count: i8) {
        if modifiers == 0 {
            return;
        }
        let down = count > 0;
        let mut changed = 0;
        for i in 0..8 {
            if modifiers & (1 << i) == 0 {
                continue;
            }
            let before = self.modifier_count[i] > 0;
            self.modifier_count[i] = self.modifier_count[i].saturating_add(count).max(0);
            if before != (self.modifier_count[i] > 0) {
                changed |= 1 << i;
            }
        }
        if changed != 0 {
            self.report(KeyEvent::Modifiers(changed, down));
        }
    }

    fn report(&mut self, message: KeyEvent) {
        self.report_channel.report(message);
    }
}

#[cfg(test)]
#[path = "mapper_test.rs"]
mod test;
