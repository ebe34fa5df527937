//! Alteration stack applied on top of a base stat value.
//!
//! An [`Alterable`] holds a base value and an ordered list of
//! alterations, each an opaque `V -> V` function tagged additive or
//! multiplicative. The derived value is recomputed from the base on
//! every read: all additive alterations fold first (in insertion
//! order), then all multiplicative ones fold over that intermediate.
//! There is no cross-kind interleaving and no caching.

/// How an alteration participates in the fold.
///
/// Additive alterations are applied to the base first; multiplicative
/// alterations are applied to the additive result. Within a kind,
/// insertion order is preserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlterationKind {
    Additive,
    Multiplicative,
}

/// Opaque handle to a single alteration, returned by
/// [`Alterable::alterate`] and consumed by [`Alterable::remove`].
///
/// Handles are unique per stack for its whole lifetime; a removed
/// handle is never reissued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AlterationId(u64);

type AlterationFn<V> = Box<dyn Fn(V) -> V + Send + Sync>;

struct Alteration<V> {
    id: AlterationId,
    kind: AlterationKind,
    apply: AlterationFn<V>,
}

/// A base value with a removable stack of alterations.
///
/// # Example
/// ```
/// use bluemon_core::stats::{Alterable, AlterationKind};
///
/// let mut power = Alterable::new(10.0_f32);
/// let buff = power.alterate(AlterationKind::Additive, |v| v + 5.0);
/// power.alterate(AlterationKind::Multiplicative, |v| v * 2.0);
/// assert_eq!(power.value(), 30.0); // (10 + 5) * 2
/// assert_eq!(power.bonus(), 20.0);
///
/// power.remove(buff);
/// assert_eq!(power.value(), 20.0); // 10 * 2
///
/// power.reset();
/// assert_eq!(power.value(), power.base());
/// ```
pub struct Alterable<V> {
    base: V,
    next_id: u64,
    alterations: Vec<Alteration<V>>,
}

impl<V: Copy> Alterable<V> {
    /// Creates a stack with the given base value and no alterations.
    pub fn new(base: V) -> Self {
        Self {
            base,
            next_id: 0,
            alterations: Vec::new(),
        }
    }

    /// The unaltered base value.
    pub fn base(&self) -> V {
        self.base
    }

    /// Replaces the base value. Live alterations keep applying on top
    /// of the new base.
    pub fn set_base(&mut self, base: V) {
        self.base = base;
    }

    /// Appends an alteration and returns its removal handle.
    pub fn alterate(
        &mut self,
        kind: AlterationKind,
        f: impl Fn(V) -> V + Send + Sync + 'static,
    ) -> AlterationId {
        let id = AlterationId(self.next_id);
        self.next_id += 1;
        self.alterations.push(Alteration {
            id,
            kind,
            apply: Box::new(f),
        });
        id
    }

    /// Removes the alteration with the given handle.
    ///
    /// Removing an unknown (or already removed) handle is a silent
    /// no-op, signalled only by the `false` return.
    pub fn remove(&mut self, id: AlterationId) -> bool {
        let before = self.alterations.len();
        self.alterations.retain(|a| a.id != id);
        self.alterations.len() != before
    }

    /// Clears every alteration, restoring the derived value to base.
    pub fn reset(&mut self) {
        self.alterations.clear();
    }

    /// Removes every alteration whose kind matches the predicate.
    pub fn reset_where(&mut self, pred: impl Fn(AlterationKind) -> bool) {
        self.alterations.retain(|a| !pred(a.kind));
    }

    /// The derived value, recomputed from the base on every call.
    pub fn value(&self) -> V {
        let additive = self
            .alterations
            .iter()
            .filter(|a| a.kind == AlterationKind::Additive)
            .fold(self.base, |acc, a| (a.apply)(acc));

        self.alterations
            .iter()
            .filter(|a| a.kind == AlterationKind::Multiplicative)
            .fold(additive, |acc, a| (a.apply)(acc))
    }

    /// Number of live alterations.
    pub fn len(&self) -> usize {
        self.alterations.len()
    }

    /// Returns true if no alterations are applied.
    pub fn is_empty(&self) -> bool {
        self.alterations.is_empty()
    }
}

impl Alterable<f32> {
    /// Derived minus base.
    pub fn bonus(&self) -> f32 {
        self.value() - self.base
    }

    /// `(derived / base) - 1`, or `0.0` when the base is zero.
    pub fn bonus_percent(&self) -> f32 {
        if self.base == 0.0 {
            return 0.0;
        }
        self.value() / self.base - 1.0
    }
}

impl<V: Copy + core::fmt::Debug> core::fmt::Debug for Alterable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Alterable")
            .field("base", &self.base)
            .field("alterations", &self.alterations.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn additive_folds_before_multiplicative_regardless_of_insertion_order() {
        let mut a = Alterable::new(10.0_f32);
        a.alterate(AlterationKind::Multiplicative, |v| v * 2.0);
        a.alterate(AlterationKind::Additive, |v| v + 5.0);
        assert_eq!(a.value(), 30.0);

        let mut b = Alterable::new(10.0_f32);
        b.alterate(AlterationKind::Additive, |v| v + 5.0);
        b.alterate(AlterationKind::Multiplicative, |v| v * 2.0);
        assert_eq!(b.value(), a.value());
    }

    #[test]
    fn intra_kind_order_is_insertion_order() {
        // Both additive; order matters for non-commutative functions.
        let mut a = Alterable::new(10.0_f32);
        a.alterate(AlterationKind::Additive, |v| v * 0.0); // zero out
        a.alterate(AlterationKind::Additive, |v| v + 3.0);
        assert_eq!(a.value(), 3.0);

        let mut b = Alterable::new(10.0_f32);
        b.alterate(AlterationKind::Additive, |v| v + 3.0);
        b.alterate(AlterationKind::Additive, |v| v * 0.0);
        assert_eq!(b.value(), 0.0);
    }

    #[test]
    fn value_tracks_base_mutation() {
        let mut a = Alterable::new(4_i32);
        a.alterate(AlterationKind::Additive, |v| v + 1);
        a.set_base(10);
        assert_eq!(a.base(), 10);
        assert_eq!(a.value(), 11);
    }

    #[test]
    fn remove_unknown_id_is_a_silent_noop() {
        let mut a = Alterable::new(1.0_f32);
        let id = a.alterate(AlterationKind::Additive, |v| v + 1.0);
        assert!(a.remove(id));
        assert!(!a.remove(id));
        assert_eq!(a.value(), 1.0);
    }

    #[test]
    fn handles_stay_unique_after_removal() {
        let mut a = Alterable::new(0.0_f32);
        let first = a.alterate(AlterationKind::Additive, |v| v + 1.0);
        a.remove(first);
        let second = a.alterate(AlterationKind::Additive, |v| v + 2.0);
        assert_ne!(first, second);
        assert!(!a.remove(first));
        assert_eq!(a.value(), 2.0);
    }

    #[test]
    fn reset_where_drops_only_matching_kinds() {
        let mut a = Alterable::new(10.0_f32);
        a.alterate(AlterationKind::Additive, |v| v + 5.0);
        a.alterate(AlterationKind::Multiplicative, |v| v * 2.0);

        a.reset_where(|kind| kind == AlterationKind::Multiplicative);
        assert_eq!(a.len(), 1);
        assert_eq!(a.value(), 15.0);
    }

    #[test]
    fn reset_restores_base() {
        let mut a = Alterable::new(7.5_f32);
        a.alterate(AlterationKind::Additive, |v| v + 2.5);
        a.alterate(AlterationKind::Multiplicative, |v| v * 3.0);
        a.reset();
        assert!(a.is_empty());
        assert_eq!(a.value(), 7.5);
    }

    #[test]
    fn bonus_and_percent() {
        let mut a = Alterable::new(20.0_f32);
        a.alterate(AlterationKind::Multiplicative, |v| v * 1.5);
        assert_eq!(a.bonus(), 10.0);
        assert!((a.bonus_percent() - 0.5).abs() < 1e-6);

        let zero = Alterable::new(0.0_f32);
        assert_eq!(zero.bonus_percent(), 0.0);
    }
}
