use std::fmt;

pub type NodeId = u32;
pub type EdgeId = u32;
pub type Weight = u64;

/// weight as handed over by the input layer, signed so negative values can be rejected
pub type InputWeight = i64;

pub const INFINITY: Weight = std::u64::MAX / 2;

/// every raw distance at or above this value counts as unreachable
pub const UNREACHABLE_GUARD: Weight = INFINITY / 4;

pub type NodeIds = Vec<NodeId>;
pub type Weights = Vec<Weight>;
pub type Arclist = [(NodeId, Weight)];

pub fn is_reachable(raw_distance: Weight) -> bool {
    raw_distance < UNREACHABLE_GUARD
}

/// shortest path distance as reported to callers, raw sentinels never leave the engine
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Distance {
    Finite(Weight),
    Unreachable,
}

impl Distance {

    pub fn from_raw(raw_distance: Weight) -> Self {
        if is_reachable(raw_distance) {
            Distance::Finite(raw_distance)
        }
        else {
            Distance::Unreachable
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(&self) -> Option<Weight> {
        match self {
            Distance::Finite(weight) => Some(*weight),
            Distance::Unreachable => None,
        }
    }

    /// addition with unreachable as absorbing element
    pub fn add_distance(self, other: Distance) -> Distance {
        match (self, other) {
            (Distance::Finite(first), Distance::Finite(second)) => match first.checked_add(second) {
                Some(sum) => Distance::from_raw(sum),
                None => Distance::Unreachable,
            },
            _ => Distance::Unreachable,
        }
    }
}

impl fmt::Display for Distance {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(weight) => write!(f, "{}", weight),
            Distance::Unreachable => write!(f, "INF"),
        }
    }
}

/// role tag of a node, districts and shelters are the nodes of interest
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum NodeRole {
    District,
    Shelter,
    Other,
}

impl NodeRole {

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "D" => NodeRole::District,
            "S" => NodeRole::Shelter,
            _ => NodeRole::Other,
        }
    }

    pub fn tag(&self) -> char {
        match self {
            NodeRole::District => 'D',
            NodeRole::Shelter => 'S',
            NodeRole::Other => 'O',
        }
    }

    pub fn is_of_interest(&self) -> bool {
        !matches!(self, NodeRole::Other)
    }
}
