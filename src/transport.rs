use crate::message::Envelope;

/// Mail transport receiving composed messages
///
/// Delivery is a blocking call. The returned flag is handed to the caller of
/// [`Composer::send`](crate::Composer::send) unchanged.
pub trait Transport {
    fn deliver(&mut self, envelope: &Envelope) -> bool;
}

impl<'a, T: Transport + ?Sized> Transport for &'a mut T {
    fn deliver(&mut self, envelope: &Envelope) -> bool {
        (**self).deliver(envelope)
    }
}

/// Transport which keeps delivered envelopes in memory
#[derive(Debug, Clone)]
pub struct StubTransport {
    accept: bool,
    delivered: Vec<Envelope>,
}

impl StubTransport {
    /// Create transport reporting every delivery as successful
    pub fn new() -> Self {
        StubTransport {
            accept: true,
            delivered: Vec::new(),
        }
    }

    /// Create transport reporting every delivery as failed
    pub fn failing() -> Self {
        StubTransport {
            accept: false,
            delivered: Vec::new(),
        }
    }

    /// Envelopes received so far, in delivery order
    pub fn delivered(&self) -> &[Envelope] {
        &self.delivered
    }
}

impl Default for StubTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for StubTransport {
    fn deliver(&mut self, envelope: &Envelope) -> bool {
        self.delivered.push(envelope.clone());
        self.accept
    }
}
