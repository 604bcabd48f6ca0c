use crate::bond::BondOrder;
use crate::wrappers::Hybridization;

pub trait HasAtomicNum {
    fn atomic_num(&self) -> u8;
}

pub trait HasFormalCharge {
    fn formal_charge(&self) -> i8;
}

pub trait HasHydrogenCount {
    fn hydrogen_count(&self) -> u8;
}

pub trait HasHybridization {
    fn hybridization(&self) -> Hybridization;
}

pub trait HasBondOrder {
    fn bond_order(&self) -> BondOrder;
}

pub trait HasBondOrderMut {
    fn bond_order_mut(&mut self) -> &mut BondOrder;
}
