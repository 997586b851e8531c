use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::types::ThumbnailType;

// ROM folder alias (as used by frontends such as EmulationStation) -> catalog system name.
pub static CONSOLE_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    let pairs = [
        ("3do", "The_3DO_Company_-_3DO"),
        ("amiga", "Commodore_-_Amiga"),
        ("amiga1200", "Commodore_-_Amiga"),
        ("amiga600", "Commodore_-_Amiga"),
        ("amigacd32", "Commodore_-_CD32"),
        ("amstradcpc", "Amstrad_-_CPC"),
        ("arcade", "MAME"),
        ("arcadia", "Emerson_-_Arcadia_2001"),
        ("arduboy", "Arduboy_Inc_-_Arduboy"),
        ("atari2600", "Atari_-_2600"),
        ("atari5200", "Atari_-_5200"),
        ("atari7800", "Atari_-_7800"),
        ("atari800", "Atari_-_8-bit"),
        ("atarijaguar", "Atari_-_Jaguar"),
        ("atarilynx", "Atari_-_Lynx"),
        ("atarist", "Atari_-_ST"),
        ("atarixe", "Atari_-_8-bit"),
        ("atomiswave", "Atomiswave"),
        ("c64", "Commodore_-_64"),
        ("cdtv", "Commodore_-_CDTV"),
        ("channelf", "Fairchild_-_Channel_F"),
        ("colecovision", "Coleco_-_ColecoVision"),
        ("cps", "FBNeo_-_Arcade_Games"),
        ("cps1", "FBNeo_-_Arcade_Games"),
        ("cps2", "FBNeo_-_Arcade_Games"),
        ("cps3", "FBNeo_-_Arcade_Games"),
        ("dreamcast", "Sega_-_Dreamcast"),
        ("famicom", "Nintendo_-_Nintendo_Entertainment_System"),
        ("fba", "FBNeo_-_Arcade_Games"),
        ("fbneo", "FBNeo_-_Arcade_Games"),
        ("fds", "Nintendo_-_Family_Computer_Disk_System"),
        ("gamegear", "Sega_-_Game_Gear"),
        ("gb", "Nintendo_-_Game_Boy"),
        ("gba", "Nintendo_-_Game_Boy_Advance"),
        ("gbc", "Nintendo_-_Game_Boy_Color"),
        ("gc", "Nintendo_-_GameCube"),
        ("genesis", "Sega_-_Mega_Drive_-_Genesis"),
        ("gx4000", "Amstrad_-_GX4000"),
        ("intellivision", "Mattel_-_Intellivision"),
        ("mame", "MAME"),
        ("mark3", "Sega_-_Master_System_-_Mark_III"),
        ("mastersystem", "Sega_-_Master_System_-_Mark_III"),
        ("megacd", "Sega_-_Mega-CD_-_Sega_CD"),
        ("megacdjp", "Sega_-_Mega-CD_-_Sega_CD"),
        ("megadrive", "Sega_-_Mega_Drive_-_Genesis"),
        ("megadrivejp", "Sega_-_Mega_Drive_-_Genesis"),
        ("msx", "Microsoft_-_MSX"),
        ("msx1", "Microsoft_-_MSX"),
        ("msx2", "Microsoft_-_MSX2"),
        ("n3ds", "Nintendo_-_Nintendo_3DS"),
        ("n64", "Nintendo_-_Nintendo_64"),
        ("n64dd", "Nintendo_-_Nintendo_64DD"),
        ("naomi", "Sega_-_Naomi"),
        ("naomi2", "Sega_-_Naomi_2"),
        ("naomigd", "Sega_-_Naomi"),
        ("nds", "Nintendo_-_Nintendo_DS"),
        ("neogeo", "SNK_-_Neo_Geo"),
        ("neogeocd", "SNK_-_Neo_Geo_CD"),
        ("neogeocdjp", "SNK_-_Neo_Geo_CD"),
        ("nes", "Nintendo_-_Nintendo_Entertainment_System"),
        ("ngp", "SNK_-_Neo_Geo_Pocket"),
        ("ngpc", "SNK_-_Neo_Geo_Pocket_Color"),
        ("odyssey2", "Magnavox_-_Odyssey2"),
        ("pc88", "NEC_-_PC-8001_-_PC-8801"),
        ("pc98", "NEC_-_PC-98"),
        ("pcengine", "NEC_-_PC_Engine_-_TurboGrafx_16"),
        ("pcenginecd", "NEC_-_PC_Engine_CD_-_TurboGrafx-CD"),
        ("pcfx", "NEC_-_PC-FX"),
        ("plus4", "Commodore_-_Plus-4"),
        ("pokemini", "Nintendo_-_Pokemon_Mini"),
        ("ps2", "Sony_-_PlayStation_2"),
        ("ps3", "Sony_-_PlayStation_3"),
        ("ps4", "Sony_-_PlayStation_4"),
        ("psp", "Sony_-_PlayStation_Portable"),
        ("psvita", "Sony_-_PlayStation_Vita"),
        ("psx", "Sony_-_PlayStation"),
        ("pv1000", "Casio_-_PV-1000"),
        ("satellaview", "Nintendo_-_Satellaview"),
        ("saturn", "Sega_-_Saturn"),
        ("saturnjp", "Sega_-_Saturn"),
        ("scummvm", "ScummVM"),
        ("scv", "Epoch_-_Super_Cassette_Vision"),
        ("sega32x", "Sega_-_32X"),
        ("sega32xjp", "Sega_-_32X"),
        ("sega32xna", "Sega_-_32X"),
        ("segacd", "Sega_-_Mega-CD_-_Sega_CD"),
        ("sfc", "Nintendo_-_Super_Nintendo_Entertainment_System"),
        ("sg-1000", "Sega_-_SG-1000"),
        ("snes", "Nintendo_-_Super_Nintendo_Entertainment_System"),
        ("snesna", "Nintendo_-_Super_Nintendo_Entertainment_System"),
        ("sufami", "Nintendo_-_Sufami_Turbo"),
        ("supergrafx", "NEC_-_PC_Engine_SuperGrafx"),
        ("supracan", "Funtech_-_Super_Acan"),
        ("tg16", "NEC_-_PC_Engine_-_TurboGrafx_16"),
        ("tg-cd", "NEC_-_PC_Engine_CD_-_TurboGrafx-CD"),
        ("vectrex", "GCE_-_Vectrex"),
        ("vic20", "Commodore_-_VIC-20"),
        ("videopac", "Philips_-_Videopac"),
        ("virtualboy", "Nintendo_-_Virtual_Boy"),
        ("wii", "Nintendo_-_Wii"),
        ("wiiu", "Nintendo_-_Wii_U"),
        ("wonderswan", "Bandai_-_WonderSwan"),
        ("wonderswancolor", "Bandai_-_WonderSwan_Color"),
        ("x1", "Sharp_-_X1"),
        ("x68000", "Sharp_-_X68000"),
        ("xbox", "Microsoft_-_Xbox"),
        ("xbox360", "Microsoft_-_Xbox_360"),
        ("zx81", "Sinclair_-_ZX_81"),
        ("zxspectrum", "Sinclair_-_ZX_Spectrum"),
    ];

    for (k, v) in pairs {
        m.insert(k, v);
    }
    m
});

// Catalog row label -> thumbnail type.
static THUMBNAIL_LABELS: Lazy<HashMap<&'static str, ThumbnailType>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("Named_Snaps", ThumbnailType::Snapshot);
    m.insert("Named_Boxarts", ThumbnailType::Boxart);
    m.insert("Named_Titles", ThumbnailType::TitleScreen);
    m
});

/// Catalog system name for a ROM folder. `None` when the folder is not a
/// known alias; callers fall back to the folder name itself.
pub fn catalog_system_for_folder(folder: &str) -> Option<&'static str> {
    CONSOLE_MAP.get(folder).copied()
}

/// Like [`catalog_system_for_folder`] but passes unknown folders through.
pub fn resolve_system(folder: &str) -> String {
    catalog_system_for_folder(folder)
        .map(str::to_string)
        .unwrap_or_else(|| folder.to_string())
}

pub fn thumbnail_type_from_label(label: &str) -> Option<ThumbnailType> {
    THUMBNAIL_LABELS.get(label).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_folder_aliases() {
        assert_eq!(resolve_system("genesis"), "Sega_-_Mega_Drive_-_Genesis");
        assert_eq!(resolve_system("megadrive"), "Sega_-_Mega_Drive_-_Genesis");
        assert_eq!(resolve_system("snes"), "Nintendo_-_Super_Nintendo_Entertainment_System");
        assert_eq!(resolve_system("fbneo"), "FBNeo_-_Arcade_Games");
    }

    #[test]
    fn unknown_folder_passes_through() {
        assert_eq!(catalog_system_for_folder("Sega_Genesis"), None);
        assert_eq!(resolve_system("Sega_Genesis"), "Sega_Genesis");
        // lookups are case sensitive
        assert_eq!(resolve_system("SNES"), "SNES");
    }

    #[test]
    fn thumbnail_labels_cover_every_type() {
        assert_eq!(thumbnail_type_from_label("Named_Snaps"), Some(ThumbnailType::Snapshot));
        assert_eq!(thumbnail_type_from_label("Named_Boxarts"), Some(ThumbnailType::Boxart));
        assert_eq!(thumbnail_type_from_label("Named_Titles"), Some(ThumbnailType::TitleScreen));
        assert_eq!(thumbnail_type_from_label("Named_Logos"), None);
        assert_eq!(thumbnail_type_from_label("named_snaps"), None);
    }
}
