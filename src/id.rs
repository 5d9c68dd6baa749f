/// Monotonic ID generator shared by cities and aliens.
/// Guarantees globally unique IDs — no two objects of either kind share one.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> u64 {
        self.next += 1;
        self.next
    }
}
