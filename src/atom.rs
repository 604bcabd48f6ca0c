/// Default atom type for a molecular graph node.
///
/// `Atom` stores the intrinsic properties that bond-order resolution reads:
/// element, formal charge and the suppressed hydrogen count. Hybridization is
/// not stored here; it is attached with
/// [`WithHybridization`](crate::wrappers::WithHybridization) by whatever
/// perception step the caller runs.
///
/// # Examples
///
/// ```
/// use ringbond::Atom;
///
/// let nitrogen = Atom {
///     atomic_num: 7,
///     formal_charge: 0,
///     hydrogen_count: 1,
/// };
/// assert_eq!(nitrogen.atomic_num, 7);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Atom {
    /// Atomic number (1 = H, 6 = C, 7 = N, …). Identifies the element.
    pub atomic_num: u8,
    /// Formal charge in elementary charge units.
    pub formal_charge: i8,
    /// Number of implicit hydrogens on this atom.
    ///
    /// These are not graph nodes. They count against the atom's valence
    /// exactly like a single bond would.
    pub hydrogen_count: u8,
}

impl Atom {
    pub fn new(atomic_num: u8) -> Self {
        Self {
            atomic_num,
            ..Self::default()
        }
    }

    pub fn with_hydrogens(mut self, count: u8) -> Self {
        self.hydrogen_count = count;
        self
    }

    pub fn with_charge(mut self, charge: i8) -> Self {
        self.formal_charge = charge;
        self
    }
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> u8 {
        self.atomic_num
    }
}

impl crate::traits::HasFormalCharge for Atom {
    fn formal_charge(&self) -> i8 {
        self.formal_charge
    }
}

impl crate::traits::HasHydrogenCount for Atom {
    fn hydrogen_count(&self) -> u8 {
        self.hydrogen_count
    }
}
