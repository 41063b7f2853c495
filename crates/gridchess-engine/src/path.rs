//! Path reporting and the highlight-marker pool.
//!
//! `create_path` does not return a set of squares; it pushes every reachable
//! square into a [`PathSink`] as it is discovered. The rendering layer backs
//! its sink with a [`MarkerPool`] so highlight markers are recycled instead
//! of re-created on every selection.

use gridchess_board::Square;

/// The kind of highlight a reported square should receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MarkerKind {
    /// Plain reachable square.
    Reach = 0,
    /// Square occupied by a capturable enemy piece.
    Capture = 1,
    /// En-passant destination (the captured pawn is beside it, not on it).
    EnPassant = 2,
    /// Castling destination for the king.
    Castle = 3,
}

impl MarkerKind {
    /// All marker kinds in order.
    pub const ALL: [MarkerKind; 4] = [
        MarkerKind::Reach,
        MarkerKind::Capture,
        MarkerKind::EnPassant,
        MarkerKind::Castle,
    ];

    /// Returns the index of this kind (0-3).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One square discovered during path creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathReport {
    /// The square the piece stands on.
    pub origin: Square,
    /// The reachable square.
    pub dest: Square,
    pub kind: MarkerKind,
}

/// Receiver for squares discovered during path creation, called once per
/// reachable square.
pub trait PathSink {
    fn report(&mut self, report: PathReport);
}

/// A sink that simply records every report; used by tests and headless
/// consumers of the path data.
#[derive(Debug, Default)]
pub struct SquareCollector {
    pub reports: Vec<PathReport>,
}

impl SquareCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the reported destination squares in discovery order.
    pub fn destinations(&self) -> Vec<Square> {
        self.reports.iter().map(|r| r.dest).collect()
    }

    /// Returns true if `dest` was reported with any kind.
    pub fn contains(&self, dest: Square) -> bool {
        self.reports.iter().any(|r| r.dest == dest)
    }

    /// Returns the kind `dest` was reported with, if it was.
    pub fn kind_of(&self, dest: Square) -> Option<MarkerKind> {
        self.reports.iter().find(|r| r.dest == dest).map(|r| r.kind)
    }
}

impl PathSink for SquareCollector {
    fn report(&mut self, report: PathReport) {
        self.reports.push(report);
    }
}

/// A highlight marker placed on a square. Inactive markers live in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub square: Square,
    pub active: bool,
}

/// Recycling cache of highlight markers, keyed by marker kind.
///
/// `acquire` hands out a pooled marker when one is available and only
/// creates a new one when the pool for that kind is empty; `release`
/// deactivates a marker and returns it to its pool.
#[derive(Debug, Default)]
pub struct MarkerPool {
    free: [Vec<Marker>; MarkerKind::ALL.len()],
    created: usize,
}

impl MarkerPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes a marker of the given kind out of the pool, creating one only
    /// if none is available, and activates it on `square`.
    pub fn acquire(&mut self, kind: MarkerKind, square: Square) -> Marker {
        match self.free[kind.index()].pop() {
            Some(mut marker) => {
                marker.square = square;
                marker.active = true;
                marker
            }
            None => {
                self.created += 1;
                Marker {
                    kind,
                    square,
                    active: true,
                }
            }
        }
    }

    /// Deactivates a marker and puts it back into its kind's pool.
    pub fn release(&mut self, mut marker: Marker) {
        marker.active = false;
        self.free[marker.kind.index()].push(marker);
    }

    /// Returns how many markers of the given kind are pooled and inactive.
    pub fn available(&self, kind: MarkerKind) -> usize {
        self.free[kind.index()].len()
    }

    /// Returns how many markers have ever been created.
    pub fn total_created(&self) -> usize {
        self.created
    }
}

/// A [`PathSink`] that materializes one pooled marker per reported square.
///
/// Dropping the path (via [`clear`](MarkerSink::clear)) releases every
/// marker back to the pool for the next selection.
#[derive(Debug)]
pub struct MarkerSink<'a> {
    pool: &'a mut MarkerPool,
    placed: Vec<Marker>,
}

impl<'a> MarkerSink<'a> {
    pub fn new(pool: &'a mut MarkerPool) -> Self {
        MarkerSink {
            pool,
            placed: Vec::new(),
        }
    }

    /// Markers currently placed on the board.
    pub fn placed(&self) -> &[Marker] {
        &self.placed
    }

    /// Releases all placed markers back to the pool.
    pub fn clear(&mut self) {
        for marker in self.placed.drain(..) {
            self.pool.release(marker);
        }
    }
}

impl PathSink for MarkerSink<'_> {
    fn report(&mut self, report: PathReport) {
        let marker = self.pool.acquire(report.kind, report.dest);
        self.placed.push(marker);
    }
}
