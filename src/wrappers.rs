use crate::traits::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hybridization {
    S,
    SP,
    SP2,
    #[default]
    SP3,
    SP3D,
    SP3D2,
    /// Trigonal planar center that is not formally sp2, e.g. an amide-like
    /// nitrogen whose lone pair sits in the pi system.
    Planar3,
    Other,
}

impl Hybridization {
    /// Whether an atom with this hybridization can take part in a conjugated
    /// planar ring.
    pub fn is_planar_conjugated(self) -> bool {
        matches!(self, Hybridization::SP2 | Hybridization::Planar3)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithHybridization<T> {
    pub inner: T,
    pub hybridization: Hybridization,
}

impl<T> WithHybridization<T> {
    pub fn new(inner: T, hybridization: Hybridization) -> Self {
        Self {
            inner,
            hybridization,
        }
    }
}

impl<T> HasHybridization for WithHybridization<T> {
    fn hybridization(&self) -> Hybridization {
        self.hybridization
    }
}

macro_rules! delegate_trait {
    ($wrapper:ident, $trait:ident, $method:ident, $ret:ty) => {
        impl<T: $trait> $trait for $wrapper<T> {
            fn $method(&self) -> $ret {
                self.inner.$method()
            }
        }
    };
}

delegate_trait!(WithHybridization, HasAtomicNum, atomic_num, u8);
delegate_trait!(WithHybridization, HasFormalCharge, formal_charge, i8);
delegate_trait!(WithHybridization, HasHydrogenCount, hydrogen_count, u8);
