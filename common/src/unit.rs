//! Marker types.

/// Marker of an entity creation.
#[derive(Clone, Copy, Debug)]
pub struct Creation;

/// Marker of a decision taken upon an entity.
#[derive(Clone, Copy, Debug)]
pub struct Review;

/// Marker of a beginning of some period.
#[derive(Clone, Copy, Debug)]
pub struct Start;

/// Marker of an end of some period.
#[derive(Clone, Copy, Debug)]
pub struct End;
