//! Compiled-in province and district catalog.
//!
//! The remote table stores province and district names as plain strings, so
//! the names here must match the service's vocabulary exactly.

/// Province name paired with its districts, both in display order.
static PROVINCE_DISTRICTS: &[(&str, &[&str])] = &[
    (
        "Cabo Delgado",
        &[
            "Ancuabe",
            "Balama",
            "Chiure",
            "Ibo",
            "Macomia",
            "Mecufi",
            "Meluco",
            "Metuge",
            "Mocimboa da Praia",
            "Montepuez",
            "Mueda",
            "Muidumbe",
            "Namuno",
            "Nangade",
            "Palma",
            "Pemba",
            "Quissanga",
        ],
    ),
    (
        "Gaza",
        &[
            "Bilene",
            "Chibuto",
            "Chicualacuala",
            "Chigubo",
            "Chokwe",
            "Chongoene",
            "Guija",
            "Limpopo",
            "Mabalane",
            "Manjacaze",
            "Massangena",
            "Massingir",
            "Cidade De Xai-Xai",
        ],
    ),
    (
        "Inhambane",
        &[
            "Funhalouro",
            "Govuro",
            "Homoine",
            "Inhambane",
            "Inharrime",
            "Inhassoro",
            "Jangamo",
            "Mabote",
            "Massinga",
            "Maxixe",
            "Morrumbene",
            "Panda",
            "Vilanculos",
            "Zavala",
        ],
    ),
    (
        "Manica",
        &[
            "Barue",
            "Chimoio",
            "Gondola",
            "Guro",
            "Macate (Gondola)",
            "Machaze",
            "Macossa",
            "Manica",
            "Mossurize",
            "Sussundenga",
            "Tambara",
            "Vanduzi",
        ],
    ),
    (
        "Maputo",
        &[
            "Boane",
            "Magude",
            "Manhica",
            "Marracuene",
            "Cidade Da Matola",
            "Matutuine",
            "Moamba",
            "Namaacha",
        ],
    ),
    (
        "Maputo Cidade",
        &[
            "KaMavota",
            "KaMaxaquene",
            "KaMphumu",
            "KaMubukwana",
            "KaNyaka",
            "KaTembe",
            "Nlhamankulu",
        ],
    ),
    (
        "Nampula",
        &[
            "Angoche",
            "Erati",
            "Ilha de Mocambique",
            "Lalaua",
            "Moma",
            "Mogincual",
            "Liupo",
            "Malema",
            "Meconta",
            "Mecuburi",
            "Memba",
            "Mogovolas",
            "Monapo",
            "Mossuril",
            "Muecate",
            "Murrupula",
            "Nacala",
            "Nacala-a-Velha",
            "Nacaroa",
            "Nampula",
            "Rapale",
            "Ribaue",
        ],
    ),
    (
        "Niassa",
        &[
            "Chimbonila",
            "Cuamba",
            "Lago",
            "Lichinga",
            "Majune",
            "Mandimba",
            "Marrupa",
            "Maua",
            "Mavago",
            "Mecanhelas",
            "Mecula",
            "Metarica",
            "Muembe",
            "Ngauma",
            "Nipepe",
            "Sanga",
        ],
    ),
    (
        "Sofala",
        &[
            "Beira",
            "Buzi",
            "Caia",
            "Chemba",
            "Cheringoma",
            "Chibabava",
            "Dondo",
            "Gorongosa",
            "Machanga",
            "Maringue",
            "Marromeu",
            "Muanza",
            "Nhamatanda",
        ],
    ),
    (
        "Tete",
        &[
            "Angonia",
            "Cahora-Bassa",
            "Changara",
            "Chifunde",
            "Chiuta",
            "Doa",
            "Macanga",
            "Magoe",
            "Marara",
            "Maravia",
            "Moatize",
            "Mutarara",
            "Tete",
            "Tsangano",
            "Zumbo",
        ],
    ),
    (
        "Zambezia",
        &[
            "Alto Molocue",
            "Chinde",
            "Derre",
            "Gile",
            "Gurue",
            "Ile",
            "Inhassunge",
            "Luabo",
            "Lugela",
            "Maganja da Costa",
            "Milange",
            "Mocuba",
            "Mocubela",
            "Molumbo",
            "Mopeia",
            "Morrumbala",
            "Mulevala",
            "Namacurra",
            "Namarroi",
            "Nicoadala",
            "Pebane",
            "Quelimane",
        ],
    ),
];

static PROVINCES: &[&str] = &[
    "Cabo Delgado",
    "Gaza",
    "Inhambane",
    "Manica",
    "Maputo",
    "Maputo Cidade",
    "Nampula",
    "Niassa",
    "Sofala",
    "Tete",
    "Zambezia",
];

/// Returns all province names in catalog order.
pub fn provinces() -> &'static [&'static str] {
    PROVINCES
}

/// Returns the districts of `province` in catalog order.
///
/// Unknown provinces yield an empty slice.
pub fn districts_of(province: &str) -> &'static [&'static str] {
    PROVINCE_DISTRICTS
        .iter()
        .find(|(name, _)| *name == province)
        .map(|(_, districts)| *districts)
        .unwrap_or(&[])
}
