/// User events for the GUI event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiEvent {
    /// The coordinator queued compute events for the session to pump.
    ///
    /// Receiving this does not redraw by itself; the handler pumps the
    /// session and requests a redraw only if the display changed.
    Wake,
}
