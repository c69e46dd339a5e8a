macro_rules! def_units {
    ($t: ident, $doc: literal) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
        pub struct $t<T>(pub T);

        impl<T> $t<T> {
            pub fn into_inner(self) -> T {
                self.0
            }
        }
    };
}

def_units!(
    GridUnits,
    "Denotes that the inner `T` is given as `(column, row)` indices into an [`ElevationGrid`](crate::ElevationGrid)."
);
def_units!(
    TerrainUnits,
    "Denotes that the inner `T` is given relative to the center cell of a resolved [`Terrain`](crate::Terrain)."
);
def_units!(
    WindowUnits,
    "Denotes that the inner `T` is given relative to the center of a visibility window."
);
