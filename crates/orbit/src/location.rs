use crate::nav::Destination;

/// Receives the destination of an activated item. The widget does not wait
/// for or inspect the result.
pub trait Navigator {
    fn navigate(&mut self, destination: &Destination);
}

impl<F> Navigator for F
where
    F: FnMut(&Destination),
{
    fn navigate(&mut self, destination: &Destination) {
        self(destination)
    }
}

pub trait LocationQuery {
    fn current(&self) -> Destination;
}

impl<F> LocationQuery for F
where
    F: Fn() -> Destination,
{
    fn current(&self) -> Destination {
        self()
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    current: Destination,
    history: Vec<Destination>,
}

impl Router {
    pub fn new(start: Destination) -> Self {
        Self {
            current: start,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Destination {
        &self.current
    }

    /// Returns false when already at `destination`; no history entry is added
    /// in that case.
    pub fn push(&mut self, destination: Destination) -> bool {
        if destination == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, destination);
        self.history.push(previous);
        true
    }

    pub fn back(&mut self) -> Option<&Destination> {
        let previous = self.history.pop()?;
        self.current = previous;
        Some(&self.current)
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Destination::from("/"))
    }
}
