use crate::direction::Direction::{Down, East, North, South, Up, West};
use crate::graph::WorldGraph;
use crate::location::Location;

/// Where a new game begins.
pub const START_LOCATION: &str = "garden";

/// Build the manor in its pristine state: every lock closed and every item in
/// its starting room.
pub fn manor() -> WorldGraph {
    [
        Location::new(
            "garden",
            "You stand at the edge of a manicured garden. The distant laughter and clinking \
             glasses of the evening's party have gone eerily quiet since the discovery of the \
             body inside. The scent of roses and freshly cut grass mingles with the smoke of \
             your half-finished cigarette. Stone statues and hedges watch in silence. The \
             manor's grand foyer lies to the east, its doors thrown open in panic.",
        )
        .with_exit(East, "foyer")
        .with_item("cigarette_case")
        .with_item("matches"),
        Location::new(
            "foyer",
            "You step into the grand foyer where voices once rang out with laughter. Now, the \
             air feels heavy. Guests cluster in quiet groups, their eyes wide with shock. On the \
             marble floor, the host's cousin lies lifeless, a bloody handkerchief nearby. A \
             sweeping staircase rises to the north. Doors lead off in multiple directions: west \
             to the drawing room, east to the study, and south to the kitchen.",
        )
        .with_exit(West, "drawing_room")
        .with_exit(East, "study")
        .with_exit(South, "kitchen")
        .with_exit(North, "staircase")
        .with_item("bloody_handkerchief"),
        Location::new(
            "drawing_room",
            "Plush armchairs and a velvet sofa frame a low table scattered with half-empty \
             glasses. A large family portrait looms over the mantelpiece, the subjects' eyes \
             seeming to follow your every move. A locked window offers a view of the garden. On \
             a small side table, a letter with a broken wax seal begs for inspection.",
        )
        .with_exit(East, "foyer")
        .with_item("mysterious_letter"),
        Location::new(
            "study",
            "A dimly lit study with an imposing mahogany desk and shelves packed with old \
             volumes. A pipe still smolders in an ashtray. The scent of old ink and leather fills \
             the air. A heavy velvet curtain hangs on the north wall, strangely out of place. To \
             the west, you can return to the foyer.",
        )
        .with_exit(West, "foyer")
        .with_exit(North, "secret_library")
        .with_item("old_key"),
        // Too dark to find the way without a light.
        Location::new(
            "secret_library",
            "Pushing aside the velvet curtain, you enter a secret library, hidden behind the \
             study's walls. Dusty shelves sag under the weight of ancient tomes and grim \
             treatises on poisons and scandal. A single candle burns on a desk holding an \
             incriminating ledger. This place feels like a shrine to secrets. From here, you may \
             only return south to the study.",
        )
        .with_exit(South, "study")
        .with_item("incriminating_ledger")
        .locked_by("lantern"),
        Location::new(
            "kitchen",
            "The kitchen's warmth and savory aromas linger, though the servants are on edge. \
             Copper pots reflect the lamplight. A large butcher's block sits in the center, a \
             carving knife embedded deep in its surface. Nervous whispers point to the cellar \
             door to the south, which is firmly locked. The garden lies to the west, and you can \
             return north to the foyer.",
        )
        .with_exit(North, "foyer")
        .with_exit(West, "garden")
        .with_exit(South, "cellar")
        .with_item("carving_knife"),
        Location::new(
            "staircase",
            "The grand staircase ascends gracefully. As you climb, a hush falls. The murderer \
             could be lurking above. At the landing, you see a door to the guest bedroom to the \
             east, and a locked door to the west, surely the master bedroom. Portraits of the \
             family line the walls, their painted eyes filled with secrets.",
        )
        .with_exit(Down, "foyer")
        .with_exit(East, "guest_bedroom")
        .with_exit(West, "master_bedroom"),
        Location::new(
            "guest_bedroom",
            "A neat guest bedroom, prepared with care for visitors. The bed is made, the desk \
             beneath the window is orderly, and a perfume bottle sits on the vanity. The drapes \
             billow softly, and the open window leads onto a narrow balcony to the south. If \
             there were footsteps, they've been expertly erased.",
        )
        .with_exit(West, "staircase")
        .with_exit(South, "balcony")
        .with_item("perfume_bottle"),
        Location::new(
            "master_bedroom",
            "Before you is a heavily carved door to the master bedroom, no doubt. Rumors swirl \
             about what could be inside: financial ledgers, private letters, family disputes. \
             With the right key, you could uncover what the host might be hiding here.",
        )
        .with_exit(East, "staircase")
        .locked_by("old_key"),
        Location::new(
            "balcony",
            "Stepping onto the balcony, a gentle breeze ruffles your hair. Below, the dark \
             garden stretches out, hedges shaping shadows on the lawn. Guests still murmur near \
             the foyer doors, oblivious to you overhead. If you had something to help you climb \
             down quietly, you might reach a part of the grounds otherwise unexplored. You can \
             return north to the guest bedroom.",
        )
        .with_exit(North, "guest_bedroom")
        .with_exit(Down, "orchard")
        .with_item("silk_scarf"),
        // The door or grate can be pried open with a sturdy blade.
        Location::new(
            "cellar",
            "A dank, dark cellar that smells of mold and old wine. Rows of dusty bottles line \
             the walls. Your footsteps echo ominously. In the corner stands a locked metal \
             grate. You sense passages or tunnels may lead elsewhere. Without proper light, \
             searching further seems risky.",
        )
        .with_exit(North, "kitchen")
        .with_item("lantern")
        .locked_by("carving_knife"),
        // Reached by climbing down from the balcony on the scarf.
        Location::new(
            "orchard",
            "You descend into the orchard, a hidden grove of apple trees behind the manor. \
             Moonlight filters through the leaves, illuminating fallen fruit and the faint \
             outline of distant structures. To the east, you see a glassy silhouette of a \
             greenhouse dome, and to the south, a stable's roof peeks over a hedge. The air is \
             cool, and the silence here is profound, as if nature itself holds its breath.",
        )
        .with_exit(North, "balcony")
        .with_exit(East, "greenhouse")
        .with_exit(South, "stable")
        .with_item("orchard_ladder")
        .locked_by("silk_scarf"),
        Location::new(
            "greenhouse",
            "A delicate structure of glass and iron, the greenhouse is packed with lush greenery \
             and exotic blooms. Condensation beads on the glass panes. A workbench at the back \
             holds gardening tools that might have been used to hide evidence. The orchard lies \
             to the west, a reminder of the quiet darkness outside.",
        )
        .with_exit(West, "orchard")
        .with_item("pruning_shears")
        .locked_by("old_key"),
        Location::new(
            "stable",
            "Within the stable, horses shift nervously in their stalls. The scent of hay and \
             leather is strong. A rack of tools and bridles lines one wall, and a ladder leads to \
             a hayloft above. To the east, a narrow door leads to a small caretaker's shack. \
             Tracks in the straw hint that someone passed through recently, possibly in haste.",
        )
        .with_exit(North, "orchard")
        .with_exit(East, "caretaker_shack")
        .with_exit(Up, "hayloft")
        .with_item("rope"),
        Location::new(
            "hayloft",
            "Climbing into the hayloft, you are surrounded by bales of dried grasses and a few \
             old tools. Dust motes dance in the sliver of moonlight coming through a cracked \
             board. It's quiet here, perhaps too quiet, and you can see the stable floor below. \
             You can climb back down, but there may be something hidden among the hay.",
        )
        .with_exit(Down, "stable")
        .with_item("strange_token"),
        Location::new(
            "caretaker_shack",
            "The caretaker's shack is a cramped space filled with old tools, racks of seed \
             packets, and dusty bottles. An oil lamp flickers on a rough-hewn table. A carefully \
             kept journal sits beside it. In the floorboards, you notice a trapdoor leading \
             down. Rumor has it these old estates often have secret escape routes. To the west \
             lies the stable.",
        )
        .with_exit(West, "stable")
        .with_exit(Down, "secret_tunnel")
        .with_item("caretaker_journal"),
        Location::new(
            "secret_tunnel",
            "A narrow earthen tunnel runs beneath the estate. Moisture drips from the ceiling, \
             and your footsteps echo strangely. It's utterly dark, save for the faint glow of \
             your lantern if you've brought it. Perhaps this leads back to the cellar, or to \
             another secret somewhere in the manor's foundations.",
        )
        .with_exit(Up, "caretaker_shack")
        .with_exit(North, "cellar")
        .locked_by("lantern"),
    ]
    .into_iter()
    .collect()
}
