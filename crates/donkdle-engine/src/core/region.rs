/// Returns the human-readable name of a hint region label.
///
/// Catalog labels are written as single capitalized words (`Hivetunnel`).
/// Labels without a known display name are returned unchanged.
///
/// # Example
///
/// ```
/// use donkdle_engine::region_display_name;
///
/// assert_eq!(region_display_name("Researchanddevelopment"), "R&D");
/// assert_eq!(region_display_name("Somewhere"), "Somewhere");
/// ```
#[must_use]
pub fn region_display_name(label: &str) -> &str {
    match label {
        // Isles
        "Mainisles" => "Main Isles",
        "Outerisles" => "Outer Isles",
        "Kremisles" => "Krem Isles",
        "Earlylobbies" => "Early Lobbies",
        "Latelobbies" => "Late Lobbies",
        // Japes
        "Japescbs" => "Japes CBs",
        "Hivetunnel" => "Hive Tunnel",
        "Stormytunnel" => "Stormy Tunnel",
        "Cavesandmines" => "Caves and Mines",
        // Aztec
        "Azteccbs" => "Aztec CBs",
        "Aztectunnels" => "Aztec Tunnels",
        "Oasisandtotem" => "Oasis and Totem",
        "Tinytemple" => "Tiny Temple",
        "Fivedoortemple" => "Five Door Temple",
        "Fivedoorship" => "Five Door Ship",
        "Llamatemple" => "Llama Temple",
        // Factory
        "Factorycbs" => "Factory CBs",
        "Productionroom" => "Production Room",
        "Researchanddevelopment" => "R&D",
        // Galleon
        "Galleoncbs" => "Galleon CBs",
        "Galleoncaverns" => "Galleon Caverns",
        "Shipyardoutskirts" => "Shipyard Outskirts",
        "Treasureroom" => "Treasure Room",
        // Forest
        "Forestcbs" => "Forest CBs",
        "Forestcenterandbeanstalk" => "Center & Beanstalk",
        "Mushroomexterior" => "Mushroom Exterior",
        "Mushroominterior" => "Mushroom Interior",
        "Owltree" => "Owl Tree",
        // Caves
        "Cavescbs" => "Caves CBs",
        "Maincaves" => "Main Caves",
        // Castle
        "Castlecbs" => "Castle CBs",
        "Castlerooms" => "Castle Rooms",
        "Castlesurroundings" => "Castle Surroundings",
        "Castleunderground" => "Castle Underground",
        // Single words (Hillside, Storage, Igloo, Helm, ...) already read well
        other => other,
    }
}
