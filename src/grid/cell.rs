/// A single grid cell.
///
/// Obstacles never hold resources; the constructors keep that invariant and
/// [`Cell::deposit`] refuses to add mass to an obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    resource_count: u32,
    is_obstacle: bool,
}

impl Cell {
    /// An empty, traversable cell.
    pub fn empty() -> Self {
        Self::default()
    }

    /// An impassable cell.
    pub fn obstacle() -> Self {
        Self {
            resource_count: 0,
            is_obstacle: true,
        }
    }

    /// A traversable cell holding `count` resource units.
    pub fn with_resources(count: u32) -> Self {
        Self {
            resource_count: count,
            is_obstacle: false,
        }
    }

    pub fn resource_count(&self) -> u32 {
        self.resource_count
    }

    pub fn is_obstacle(&self) -> bool {
        self.is_obstacle
    }

    pub fn has_resources(&self) -> bool {
        self.resource_count > 0
    }

    /// Removes up to `amount` units and returns how many were removed.
    pub fn withdraw(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.resource_count);
        self.resource_count -= taken;
        taken
    }

    /// Adds `amount` units.
    ///
    /// Returns `false` and adds nothing on an obstacle or when the count
    /// would overflow.
    pub fn deposit(&mut self, amount: u32) -> bool {
        if self.is_obstacle {
            return false;
        }
        match self.resource_count.checked_add(amount) {
            Some(total) => {
                self.resource_count = total;
                true
            }
            None => false,
        }
    }
}
