use crate::ship::ShipType;

/// Side length of the square grid.
pub const GRID_SIZE: usize = 10;
pub const FLEET_SIZE: usize = 6;
pub const FLEET: [ShipType; FLEET_SIZE] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Cruiser", 4),
    ShipType::new("Destroyer1", 3),
    ShipType::new("Destroyer2", 3),
    ShipType::new("Submarine1", 2),
    ShipType::new("Submarine2", 2),
];

/// Total number of ship cells in a fully placed fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2 + 2;

/// The fixed fleet, in placement order.
pub fn fleet_template() -> &'static [ShipType] {
    &FLEET
}

/// Look up a ship type by its fleet name. Returns `None` for names that are
/// not part of the fleet.
pub fn ship_type_by_name(name: &str) -> Option<ShipType> {
    FLEET.iter().copied().find(|def| def.name() == name)
}
