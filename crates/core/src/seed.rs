//! Built-in catalog data.
//!
//! The seed reproduces the platform's authored data set: six community
//! nonprofits, three local businesses, and three recommended service points
//! around central Montréal. It is embedded as a YAML document and loaded
//! through the same strict parser as an external catalog file, so the seed is
//! validated by the same invariants and its authoring order (records,
//! categories, tasks) is preserved by the loading step.

use crate::catalog::Catalog;
use crate::catalog_file;
use crate::error::CatalogResult;

const BUILTIN_CATALOG_YAML: &str = r#"opportunities:
  - id: obnl-rosemont
    name: "Centre d'entraide Rosemont"
    neighborhood: "Rosemont–La Petite-Patrie"
    type: nonprofit
    verified: true
    distance_km: 2.1
    categories: ["Alimentation", "Familles"]
    short_description: "Aide à préparer et distribuer des paniers alimentaires pour des familles du quartier."
    map_position: { x: 65, y: 40 }
    tasks:
      - id: t1
        title: "Préparation de paniers alimentaires"
        description: "Tri des aliments, montage des paniers, rangement du local."
        duration: "~3 h"
        when: "Samedi matin, 9 h – 12 h"
        youth_friendly: true
      - id: t2
        title: "Accueil des familles"
        description: "Accueillir les familles, expliquer le fonctionnement, offrir un soutien chaleureux."
        duration: "~2 h"
        when: "Mercredi, 17 h – 19 h"
  - id: obnl-villeray
    name: "Maisonnette Jeunesse Villeray"
    neighborhood: "Villeray"
    type: nonprofit
    verified: true
    distance_km: 3.4
    categories: ["Jeunesse", "Animation"]
    short_description: "Activités after-school pour jeunes : aide aux devoirs, jeux coopératifs, ateliers créatifs."
    map_position: { x: 55, y: 30 }
    tasks:
      - id: t3
        title: "Aide aux devoirs"
        description: "Soutien scolaire pour des jeunes du primaire et du secondaire."
        duration: "~2 h"
        when: "Lundi et jeudi, 16 h – 18 h"
        youth_friendly: true
      - id: t4
        title: "Animation de jeux coopératifs"
        description: "Co-animer des activités de groupe encadrées."
        duration: "~2 h"
        when: "Vendredi, 18 h – 20 h"
  - id: obnl-hochelaga
    name: "Table de quartier Hochelaga"
    neighborhood: "Hochelaga-Maisonneuve"
    type: nonprofit
    verified: true
    distance_km: 4.2
    categories: ["Événements", "Logistique"]
    short_description: "Soutien logistique pour des événements de quartier (kiosques, montage, accueil)."
    map_position: { x: 80, y: 60 }
    tasks:
      - id: t5
        title: "Montage et démontage de kiosques"
        description: "Installer les tables, chaises, tentes, banderoles."
        duration: "~4 h"
        when: "Samedi 25 janvier, 8 h – 12 h"
      - id: t6
        title: "Accueil des participant·e·s"
        description: "Orienter les gens vers les activités et kiosques."
        duration: "~3 h"
        when: "Samedi 25 janvier, 12 h – 15 h"
        youth_friendly: true
  - id: obnl-plateau
    name: "Maison des aînés du Plateau"
    neighborhood: "Plateau-Mont-Royal"
    type: nonprofit
    verified: true
    distance_km: 1.8
    categories: ["Aînés", "Visites amicales"]
    short_description: "Présence chaleureuse auprès de personnes aînées : visites, jeux de société, accompagnement."
    map_position: { x: 50, y: 45 }
    tasks:
      - id: t7
        title: "Visites de courtoisie"
        description: "Passer du temps avec des aînés isolés : discussion, jeux de société."
        duration: "1–2 h"
        when: "À convenir selon tes disponibilités"
      - id: t8
        title: "Accompagnement à des sorties de groupe"
        description: "Accompagner un petit groupe lors d'une sortie culturelle."
        duration: "~3 h"
        when: "Dates ponctuelles, fin de semaine"
  - id: obnl-centresud
    name: "Friperie communautaire Centre-Sud"
    neighborhood: "Centre-Sud"
    type: nonprofit
    verified: false
    distance_km: 2.9
    categories: ["Réemploi", "Tri", "Accueil"]
    short_description: "Aide au tri de vêtements, à la mise en rayon et à l'accueil des personnes."
    map_position: { x: 60, y: 55 }
    tasks:
      - id: t9
        title: "Tri et mise en rayon"
        description: "Classer les dons, préparer les portants et les présentoirs."
        duration: "~3 h"
        when: "Semaine, fin d'après-midi"
  - id: obnl-parcex
    name: "Jardin collectif Parc-Extension"
    neighborhood: "Parc-Extension"
    type: nonprofit
    verified: true
    distance_km: 4.8
    categories: ["Environnement", "Jardinage"]
    short_description: "Entretien du jardin collectif et récolte partagée entre les participant·e·s."
    map_position: { x: 40, y: 25 }
    tasks:
      - id: t10
        title: "Entretien du jardin"
        description: "Désherbage, arrosage, entretien des bacs."
        duration: "~2 h"
        when: "Soirs de semaine, 18 h – 20 h (saison estivale)"
        youth_friendly: true
  - id: biz-cafe-amitie
    name: "Café L'Amitié"
    neighborhood: "Plateau-Mont-Royal"
    type: business
    verified: true
    distance_km: 1.3
    categories: ["Inventaire", "Accueil"]
    short_description: "Petit café de quartier qui cherche un coup de main ponctuel pour l'inventaire et la mise en place."
    map_position: { x: 52, y: 52 }
    tasks:
      - id: b1
        title: "Inventaire café & pâtisseries"
        description: "Compter les stocks, vérifier les dates, organiser la réserve."
        duration: "4 h"
        when: "Jeudi 16 janvier, 18 h – 22 h"
  - id: biz-epicerie-quartier
    name: "Épicerie du Quartier"
    neighborhood: "Hochelaga-Maisonneuve"
    type: business
    verified: false
    distance_km: 4.0
    categories: ["Logistique", "Livraison locale"]
    short_description: "Épicerie de proximité qui a besoin d'un coup de main ponctuel pour les réceptions et petites livraisons à pied."
    map_position: { x: 78, y: 65 }
    tasks:
      - id: b2
        title: "Mise en tablette après livraison"
        description: "Déballer les caisses, placer les produits en rayon."
        duration: "3 h"
        when: "Lundi 20 janvier, 7 h – 10 h"
      - id: b3
        title: "Petites livraisons à pied"
        description: "Livrer quelques commandes dans un rayon de 1 km (sacs légers)."
        duration: "2 h"
        when: "Horaire flexible, à définir"
  - id: biz-librairie-laurier
    name: "Librairie Laurier"
    neighborhood: "Mile-End"
    type: business
    verified: true
    distance_km: 2.7
    categories: ["Vitrine", "Culture"]
    short_description: "Librairie indépendante qui cherche de l'aide pour la mise en place de vitrines thématiques."
    map_position: { x: 48, y: 38 }
    tasks:
      - id: b4
        title: "Installation de vitrine de saison"
        description: "Installer les livres, affiches et éléments visuels selon une thématique."
        duration: "3 h"
        when: "Dimanche 19 janvier, 10 h – 13 h"
service_points:
  - id: sp-plateau-biblio
    name: "Bibliothèque du Plateau-Mont-Royal"
    neighborhood: "Plateau-Mont-Royal"
    verified: true
    map_position: { x: 52, y: 48 }
  - id: sp-hochelaga-centre
    name: "Centre communautaire Hochelaga"
    neighborhood: "Hochelaga-Maisonneuve"
    verified: true
    map_position: { x: 82, y: 62 }
  - id: sp-villeray-culture
    name: "Maison de la culture Villeray"
    neighborhood: "Villeray"
    verified: true
    map_position: { x: 58, y: 28 }
"#;

/// Load the built-in catalog.
///
/// # Errors
///
/// Returns a [`crate::error::CatalogError`] if the embedded document fails to
/// parse or validate; with the shipped seed this only happens if the seed
/// itself is edited incorrectly, and a test guards against that.
pub fn builtin_catalog() -> CatalogResult<Catalog> {
    catalog_file::parse(BUILTIN_CATALOG_YAML)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::OpportunityType;

    #[test]
    fn builtin_catalog_parses_and_validates() {
        let catalog = builtin_catalog().expect("seed must satisfy catalog invariants");
        assert_eq!(catalog.opportunities.len(), 9);
        assert_eq!(catalog.service_points.len(), 3);
    }

    #[test]
    fn builtin_catalog_keeps_authoring_order() {
        let catalog = builtin_catalog().expect("seed parses");
        let ids: Vec<&str> = catalog
            .opportunities
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "obnl-rosemont",
                "obnl-villeray",
                "obnl-hochelaga",
                "obnl-plateau",
                "obnl-centresud",
                "obnl-parcex",
                "biz-cafe-amitie",
                "biz-epicerie-quartier",
                "biz-librairie-laurier",
            ]
        );
    }

    #[test]
    fn builtin_catalog_has_six_nonprofits_and_three_businesses() {
        let catalog = builtin_catalog().expect("seed parses");
        let nonprofits = catalog
            .opportunities
            .iter()
            .filter(|o| o.opportunity_type == OpportunityType::Nonprofit)
            .count();
        assert_eq!(nonprofits, 6);
        assert_eq!(catalog.opportunities.len() - nonprofits, 3);
    }

    #[test]
    fn rosemont_centre_mentions_food_baskets_in_a_task() {
        let catalog = builtin_catalog().expect("seed parses");
        let rosemont = catalog
            .opportunities
            .iter()
            .find(|o| o.id == "obnl-rosemont")
            .expect("seed contains the Rosemont centre");
        assert_eq!(rosemont.distance_km, 2.1);
        assert_eq!(rosemont.categories, vec!["Alimentation", "Familles"]);
        assert!(rosemont
            .tasks
            .iter()
            .any(|t| t.title.contains("paniers alimentaires")));
    }
}
