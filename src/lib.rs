// Fichier principal de la bibliothèque gridworld
// Expose tous les modules pour utilisation externe (par le binaire et les tests)

pub mod types;    // Types de base (CellType, Position, erreurs)
pub mod scenario; // Génération aléatoire du scénario
pub mod persist;  // Sauvegarde texte horodatée des coordonnées
pub mod render;   // Rendu PNG de la grille
pub mod display;  // Affichage terminal

// Ré-exportation des types principaux pour faciliter l'importation
pub use display::Display;
pub use scenario::Scenario;
pub use types::*;
