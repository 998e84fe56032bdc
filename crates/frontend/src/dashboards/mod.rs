pub mod d400_patio_overview;
