use crate::{metadata::RequestMetadata, models::Catalog, Client, Result};
use std::fmt;

macro_rules! catalogs {
    ($($(#[$doc:meta])* $variant:ident => $method:ident, $path:literal;)*) => {
        /// The catalogs the API publishes.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum CatalogKind {
            $($(#[$doc])* $variant,)*
        }

        impl CatalogKind {
            /// Every catalog, in declaration order.
            pub const ALL: &'static [CatalogKind] = &[$(CatalogKind::$variant,)*];

            /// Path segment under `/catalog/`.
            pub fn path(self) -> &'static str {
                match self {
                    $(CatalogKind::$variant => $path,)*
                }
            }
        }

        impl<'a> CatalogsApi<'a> {
            $(
                $(#[$doc])*
                pub async fn $method(&self) -> Result<Catalog> {
                    self.get(CatalogKind::$variant).await
                }
            )*
        }
    };
}

catalogs! {
    /// Every English card name.
    CardNames => card_names, "card-names";
    /// Every artist name.
    ArtistNames => artist_names, "artist-names";
    /// Every English word of length 2 or more found in card names.
    WordBank => word_bank, "word-bank";
    /// Every supertype, such as `Legendary`.
    Supertypes => supertypes, "supertypes";
    /// Every card type, such as `Creature`.
    CardTypes => card_types, "card-types";
    /// Every creature type.
    CreatureTypes => creature_types, "creature-types";
    /// Every planeswalker type.
    PlaneswalkerTypes => planeswalker_types, "planeswalker-types";
    /// Every land type.
    LandTypes => land_types, "land-types";
    /// Every artifact type.
    ArtifactTypes => artifact_types, "artifact-types";
    /// Every battle type.
    BattleTypes => battle_types, "battle-types";
    /// Every enchantment type.
    EnchantmentTypes => enchantment_types, "enchantment-types";
    /// Every spell type, such as `Arcane`.
    SpellTypes => spell_types, "spell-types";
    /// Every printed power value, including `*` and fractions.
    Powers => powers, "powers";
    /// Every printed toughness value.
    Toughnesses => toughnesses, "toughnesses";
    /// Every printed starting loyalty.
    Loyalties => loyalties, "loyalties";
    /// Every watermark.
    Watermarks => watermarks, "watermarks";
    /// Every keyword ability.
    KeywordAbilities => keyword_abilities, "keyword-abilities";
    /// Every keyword action.
    KeywordActions => keyword_actions, "keyword-actions";
    /// Every ability word.
    AbilityWords => ability_words, "ability-words";
    /// Every flavor word.
    FlavorWords => flavor_words, "flavor-words";
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Lists of datapoints such as card names or creature types.
#[derive(Debug, Clone, Copy)]
pub struct CatalogsApi<'a> {
    client: &'a Client,
}

impl<'a> CatalogsApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches one catalog.
    pub async fn get(&self, kind: CatalogKind) -> Result<Catalog> {
        let request = RequestMetadata::get(format!("/catalog/{}", kind.path()));
        Ok(self.client.call::<(), Catalog>(request, None).await?.data)
    }
}
