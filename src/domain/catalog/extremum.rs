// src/domain/catalog/extremum.rs
//! Single-pass minimum / maximum selection that keeps every tied winner.

/// Which end of the key range a collector keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Min,
    Max,
}

impl Direction {
    fn improves<K: Ord>(self, candidate: &K, best: &K) -> bool {
        match self {
            Direction::Min => candidate < best,
            Direction::Max => candidate > best,
        }
    }
}

/// Collects all contexts whose key equals the best key offered so far.
///
/// Keys are compared with exact equality, so callers should use integer or
/// fixed-point keys (`Decimal`) rather than floats. Winners keep the order
/// in which they were offered.
#[derive(Debug, Clone)]
pub struct ExtremumCollector<C, K> {
    direction: Direction,
    best: Option<K>,
    winners: Vec<C>,
}

impl<C, K: Ord> ExtremumCollector<C, K> {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            best: None,
            winners: Vec::new(),
        }
    }

    pub fn offer(&mut self, context: C, key: K) {
        let improves = match &self.best {
            None => true,
            Some(best) if key == *best => {
                self.winners.push(context);
                return;
            }
            Some(best) => self.direction.improves(&key, best),
        };

        if improves {
            self.winners.clear();
            self.winners.push(context);
            self.best = Some(key);
        }
    }

    pub fn into_winners(self) -> Vec<C> {
        self.winners
    }
}

impl<C, K: Ord> Extend<(C, K)> for ExtremumCollector<C, K> {
    fn extend<I: IntoIterator<Item = (C, K)>>(&mut self, iter: I) {
        for (context, key) in iter {
            self.offer(context, key);
        }
    }
}

/// Run a collector over fallible `(context, key)` pairs, stopping at the
/// first error.
pub fn collect_extremes<C, K, E, I>(direction: Direction, pairs: I) -> Result<Vec<C>, E>
where
    K: Ord,
    I: IntoIterator<Item = Result<(C, K), E>>,
{
    let mut collector = ExtremumCollector::new(direction);
    let mut failure = None;
    collector.extend(pairs.into_iter().map_while(|pair| match pair {
        Ok(pair) => Some(pair),
        Err(err) => {
            failure = Some(err);
            None
        }
    }));

    match failure {
        Some(err) => Err(err),
        None => Ok(collector.into_winners()),
    }
}
