//! VSOP87A terms for Mars: heliocentric rectangular coordinates, ecliptic and
//! equinox J2000, AU, time in Julian millennia from J2000 TDB.
//! 294 terms, truncated offline (see `vsop87_truncate`).

use crate::series::Term;

pub(super) const X0: &[Term] = &[
    (1.51769936383, 6.20403346548, 3340.6124266998),
    (0.19502945246, 3.141592653589793, 0.0),
    (0.07070919655, 0.25870338558, 6681.2248533996),
    (0.00494196914, 0.59669127768, 10021.8372800994),
    (0.00040938237, 0.93473307419, 13362.4497067992),
    (0.00021067199, 1.80435656154, 3337.0893083508),
    (0.00021041626, 1.17895619474, 3344.1355450488),
    (0.00011370375, 4.83265211109, 1059.3819301892),
    (0.00013527976, 0.63010765169, 529.6909650946),
    (6.774107e-05, 3.61785048282, 3340.5951730476),
    (6.77406e-05, 5.64862211431, 3340.629680352),
    (8.226069e-05, 1.86843519535, 2281.2304965106),
    (5.469046e-05, 1.13324429003, 2942.4634232916),
    (4.817134e-05, 1.85091045536, 3738.761430108),
    (4.937579e-05, 4.43241440654, 5621.8429232104),
    (5.27626e-05, 2.33148083116, 6151.533888305),
    (3.636667e-05, 6.11397592106, 796.2980068164),
    (3.725823e-05, 1.27280182943, 16703.062133499),
    (3.729746e-05, 1.21398323637, 398.1490034082),
    (2.368513e-05, 2.9684189536, 2544.3144198834),
    (2.397865e-05, 0.63553674054, 3149.1641605882),
    (2.274646e-05, 2.35708328853, 3532.0606928114),
    (1.977579e-05, 2.1408782611, 6677.7017350506),
    (2.229176e-05, 1.69588962513, 3340.545116397),
    (2.229117e-05, 1.28739323821, 3340.6797370026),
    (2.182206e-05, 1.69655112969, 6283.0758499914),
    (2.24101e-05, 4.82218655311, 8962.4553499102),
    (1.677693e-05, 3.14442612046, 5884.9268465832),
    (1.630482e-05, 0.24117974845, 4136.9104335162),
    (1.958162e-05, 1.51914544555, 6684.7479717486),
    (1.37847e-05, 2.18011900021, 1751.539531416),
    (1.289804e-05, 4.70970778621, 1194.4470102246),
    (1.468124e-05, 1.87869730543, 3870.3033917944),
    (1.29017e-05, 0.43596325296, 2810.9214616052),
    (1.57254e-05, 4.84809921789, 1589.0728952838),
    (9.56752e-06, 5.36994227392, 426.598190876),
    (8.19458e-06, 5.15884167649, 4399.994356889),
    (7.08712e-06, 4.69562713369, 5486.777843175),
    (7.19048e-06, 2.91145340412, 191.4482661116),
    (7.02848e-06, 4.67590003722, 2146.1654164752),
    (7.20121e-06, 2.65539067862, 9492.1463150048),
    (6.31186e-06, 3.95569679737, 6681.2075997474),
    (6.31186e-06, 5.98646842887, 6681.2421070518),
    (5.82287e-06, 3.95295967777, 3185.1920272656),
    (7.09131e-06, 0.92869188035, 213.299095438),
    (5.55568e-06, 5.32014604077, 3496.032826134),
    (4.9219e-06, 2.17606530808, 7079.3738568078),
    (5.35122e-06, 3.30310120139, 1592.5960136328),
    (4.17652e-06, 5.30163601083, 3341.592747768),
    (4.17769e-06, 3.96482796919, 3339.6321056316),
    (3.70752e-06, 5.08127148188, 8432.7643848156),
    (3.60028e-06, 1.61089122901, 20043.6745601988),
    (3.53036e-06, 3.88678429649, 6254.6266625236),
    (3.52079e-06, 5.17043717929, 12303.06777661),
    (3.21578e-06, 1.94644283196, 3553.9115221378),
    (3.46042e-06, 6.16404119331, 5088.6288397668),
    (3.01924e-06, 0.9846089956, 3127.3133312618),
    (2.87211e-06, 2.07531303415, 7.1135470008),
    (3.0706e-06, 0.00966130243, 1748.016413067),
    (3.13875e-06, 5.106519666, 4535.0594369244),
];
pub(super) const X1: &[Term] = &[
    (0.00861441374, 3.141592653589793, 0.0),
    (0.00552437949, 5.09565872891, 6681.2248533996),
    (0.00077184977, 5.43315636209, 10021.8372800994),
    (0.00020467294, 5.57051812369, 3340.6124266998),
    (9.589581e-05, 5.77107234791, 13362.4497067992),
    (2.62061e-05, 6.22441295122, 3344.1355450488),
    (2.620537e-05, 3.04172154436, 3337.0893083508),
    (1.163612e-05, 6.10909257097, 16703.062133499),
    (9.01178e-06, 3.31585548194, 1059.3819301892),
    (4.27058e-06, 2.74008980166, 2942.4634232916),
    (3.81428e-06, 0.22342431378, 3738.761430108),
    (3.86916e-06, 5.94232552612, 5621.8429232104),
    (3.95001e-06, 0.20042939555, 6684.7479717486),
    (3.37356e-06, 5.21417361076, 3149.1641605882),
    (3.34209e-06, 2.45910275965, 3185.1920272656),
    (3.18463e-06, 4.05140251894, 3532.0606928114),
    (3.18426e-06, 0.52909208916, 3496.032826134),
    (3.12605e-06, 4.22912280613, 2544.3144198834),
    (2.89251e-06, 4.61759345454, 796.2980068164),
    (2.60308e-06, 5.02630754856, 4136.9104335162),
    (2.06733e-06, 3.21083229673, 1194.4470102246),
    (1.4057e-06, 0.16405101702, 20043.6745601988),
    (1.59366e-06, 3.57762977582, 1589.0728952838),
    (1.33819e-06, 4.64351814551, 5884.9268465832),
    (1.32323e-06, 3.70094513425, 4399.994356889),
    (1.27123e-06, 2.81806076447, 6677.7017350506),
    (1.02796e-06, 6.05672047566, 5486.777843175),
    (1.12591e-06, 5.89047647024, 2146.1654164752),
    (1.29469e-06, 1.80477637958, 1592.5960136328),
    (1.01457e-06, 3.72531913828, 3341.592747768),
    (1.01429e-06, 5.54115874275, 3339.6321056316),
    (8.9231e-07, 5.88265350957, 3870.3033917944),
    (8.4359e-07, 0.39861148409, 1990.745017041),
    (7.9681e-07, 3.91080385507, 426.598190876),
    (7.7267e-07, 0.64237838596, 7079.3738568078),
    (8.1615e-07, 5.65301248357, 5092.1519581158),
    (7.5338e-07, 1.2529851175, 5088.6288397668),
    (7.5597e-07, 3.61161529128, 4535.0594369244),
];
pub(super) const X2: &[Term] = &[
    (0.00056323939, 0.0, 0.0),
    (0.00022122528, 3.54372113272, 6681.2248533996),
    (6.091409e-05, 3.93272649649, 10021.8372800994),
    (1.451998e-05, 3.6465566646, 3340.6124266998),
    (1.130613e-05, 4.28827023222, 13362.4497067992),
    (1.8261e-06, 4.63522660125, 16703.062133499),
    (1.68904e-06, 4.68797825494, 3344.1355450488),
    (1.68384e-06, 4.57974326642, 3337.0893083508),
    (9.4103e-07, 0.9493139264, 3185.1920272656),
    (8.9578e-07, 2.0378274509, 3496.032826134),
    (4.0689e-07, 5.03331696992, 6684.7479717486),
    (3.6711e-07, 1.77362889167, 1059.3819301892),
    (2.7549e-07, 4.97859663329, 20043.6745601988),
    (2.4699e-07, 3.63560534183, 3149.1641605882),
    (2.3325e-07, 5.63009151781, 3532.0606928114),
    (2.4321e-07, 5.77247656014, 2544.3144198834),
    (2.0394e-07, 3.48794506814, 4136.9104335162),
    (1.84e-07, 3.45575979446, 3097.88382272579),
];
pub(super) const X3: &[Term] = &[
    (8.49999e-06, 0.0, 0.0),
    (5.60133e-06, 1.94007552058, 6681.2248533996),
    (3.18062e-06, 2.39391695789, 10021.8372800994),
    (1.13458e-06, 2.75680104109, 3340.6124266998),
    (8.8769e-07, 2.77668742127, 13362.4497067992),
    (1.9119e-07, 3.13835323002, 16703.062133499),
    (1.7277e-07, 3.54319327296, 3496.032826134),
    (1.7102e-07, 5.72328990016, 3185.1920272656),
    (7.98e-08, 3.07682330325, 3344.1355450488),
    (7.938e-08, 6.19210789752, 3337.0893083508),
];
pub(super) const X4: &[Term] = &[
    (2.5349e-07, 3.141592653589793, 0.0),
    (1.226e-07, 0.83414775886, 10021.8372800994),
    (1.0035e-07, 0.40425836057, 6681.2248533996),
    (5.198e-08, 1.24299509979, 13362.4497067992),
    (3.431e-08, 0.85852911695, 3340.6124266998),
    (2.427e-08, 5.05444549984, 3496.032826134),
    (2.418e-08, 4.21420537167, 3185.1920272656),
    (1.497e-08, 1.62269036988, 16703.062133499),
];
pub(super) const X5: &[Term] = &[
    (3.6e-09, 5.54721578166, 10021.8372800994),
];

pub(super) const Y0: &[Term] = &[
    (1.51558976277, 4.63212206588, 3340.6124266998),
    (0.07064550239, 4.97051892902, 6681.2248533996),
    (0.08655481102, 0.0, 0.0),
    (0.00493872848, 5.30877806694, 10021.8372800994),
    (0.00040917422, 5.64698263703, 13362.4497067992),
    (0.00021036784, 0.23240270955, 3337.0893083508),
    (0.00021012921, 5.89022773653, 3344.1355450488),
    (0.00011370034, 3.26131408801, 1059.3819301892),
    (0.00013324177, 5.34259389724, 529.6909650946),
    (6.764653e-05, 4.07671230062, 3340.629680352),
    (6.7647e-05, 2.04594066912, 3340.5951730476),
    (8.34622e-05, 3.42464704002, 2281.2304965106),
    (5.400042e-05, 5.81507793194, 2942.4634232916),
    (4.809528e-05, 0.27875310553, 3738.761430108),
    (4.849523e-05, 2.8519098755, 5621.8429232104),
    (5.263268e-05, 0.75811089992, 6151.533888305),
    (3.609527e-05, 4.53244488294, 796.2980068164),
    (3.724293e-05, 5.98516013322, 16703.062133499),
    (3.805073e-05, 5.94234296399, 398.1490034082),
    (2.39449e-05, 5.34678816191, 3149.1641605882),
    (2.251027e-05, 0.76938193892, 3532.0606928114),
    (1.975769e-05, 0.56949816579, 6677.7017350506),
    (2.22603e-05, 5.99867316288, 3340.6797370026),
    (2.226089e-05, 0.12398424247, 3340.545116397),
    (2.177591e-05, 0.12334436516, 6283.0758499914),
    (1.690439e-05, 1.58331163985, 5884.9268465832),
    (2.234121e-05, 3.24909113765, 8962.4553499102),
    (1.628395e-05, 4.95250906888, 4136.9104335162),
    (1.956411e-05, 6.23095843554, 6684.7479717486),
    (1.697214e-05, 0.81869636263, 2544.3144198834),
    (1.385946e-05, 3.73437191158, 1751.539531416),
    (1.439619e-05, 5.19505958438, 2810.9214616052),
    (1.28189e-05, 3.13035275682, 1194.4470102246),
    (1.469783e-05, 0.30415060688, 3870.3033917944),
    (1.57188e-05, 3.2767949865, 1589.0728952838),
    (1.575854e-05, 2.78266835243, 5092.1519581158),
    (9.55007e-06, 3.80044052913, 426.598190876),
    (8.19149e-06, 3.5878644054, 4399.994356889),
    (7.09907e-06, 4.50556127152, 191.4482661116),
    (7.19204e-06, 1.0835473505, 9492.1463150048),
    (6.30626e-06, 2.38434217274, 6681.2075997474),
    (6.30626e-06, 4.41511380423, 6681.2421070518),
    (6.99407e-06, 5.7173749791, 213.299095438),
    (5.92563e-06, 2.82214112368, 5486.777843175),
    (5.81408e-06, 2.38087976114, 3185.1920272656),
    (5.51361e-06, 3.73720813913, 3496.032826134),
    (4.91736e-06, 0.60462673907, 7079.3738568078),
    (4.03176e-06, 3.49532014869, 8432.7643848156),
    (5.32702e-06, 1.72629618682, 1592.5960136328),
    (4.17187e-06, 2.39288855164, 3339.6321056316),
    (4.17083e-06, 3.72975291794, 3341.592747768),
    (3.92731e-06, 1.39110771836, 2146.1654164752),
    (3.59894e-06, 0.04010740278, 20043.6745601988),
    (3.52248e-06, 2.32029465959, 6254.6266625236),
    (3.51559e-06, 3.59860692655, 12303.06777661),
    (3.21064e-06, 0.3714601715, 3553.9115221378),
    (3.13108e-06, 5.61766202779, 3127.3133312618),
    (3.13501e-06, 3.53468286874, 4535.0594369244),
];
pub(super) const Y1: &[Term] = &[
    (0.0142732421, 3.141592653589793, 0.0),
    (0.00551063753, 3.52128320402, 6681.2248533996),
    (0.00077091913, 3.86082685753, 10021.8372800994),
    (0.00037310491, 1.16016958445, 3340.6124266998),
    (9.582122e-05, 4.19942354479, 13362.4497067992),
    (2.617695e-05, 1.4728455552, 3337.0893083508),
    (2.611572e-05, 4.65030772498, 3344.1355450488),
    (1.162955e-05, 4.53778503576, 16703.062133499),
    (9.00678e-06, 1.74256260709, 1059.3819301892),
    (4.3199e-06, 1.20122419783, 2942.4634232916),
    (3.89982e-06, 4.38779713561, 5621.8429232104),
    (3.80122e-06, 4.93073729444, 3738.761430108),
    (3.94355e-06, 4.91119397796, 6684.7479717486),
    (3.36661e-06, 3.63990879619, 3149.1641605882),
    (3.33604e-06, 0.88647104051, 3185.1920272656),
    (3.18324e-06, 2.48122345477, 3532.0606928114),
    (3.16743e-06, 5.23316524269, 3496.032826134),
    (3.11468e-06, 2.66149474204, 2544.3144198834),
    (2.83006e-06, 3.01270555394, 796.2980068164),
    (2.59715e-06, 3.4528500754, 4136.9104335162),
    (2.04277e-06, 1.62196956205, 1194.4470102246),
    (1.40506e-06, 4.8761106037, 20043.6745601988),
    (1.59094e-06, 2.00474963161, 1589.0728952838),
    (1.33054e-06, 3.06497749499, 5884.9268465832),
    (1.32221e-06, 2.12903733409, 4399.994356889),
    (1.26748e-06, 1.25031299906, 6677.7017350506),
    (1.03023e-06, 4.48653117588, 5486.777843175),
    (1.28526e-06, 0.2232809582, 1592.5960136328),
    (1.01352e-06, 3.97061208738, 3339.6321056316),
    (1.01253e-06, 2.15203295056, 3341.592747768),
    (9.0029e-07, 4.30631925657, 3870.3033917944),
    (8.3977e-07, 5.1043829904, 1990.745017041),
    (7.9143e-07, 2.3446637841, 426.598190876),
    (7.8865e-07, 3.69323302292, 2146.1654164752),
    (7.7132e-07, 5.35293989072, 7079.3738568078),
    (8.1297e-07, 4.10751911033, 5092.1519581158),
    (7.5448e-07, 2.03864215811, 4535.0594369244),
];
pub(super) const Y2: &[Term] = &[
    (0.00035396765, 3.141592653589793, 0.0),
    (0.00021950759, 1.96291594946, 6681.2248533996),
    (6.07599e-05, 2.35864321001, 10021.8372800994),
    (2.571425e-05, 5.64795745327, 3340.6124266998),
    (1.129099e-05, 2.71576248963, 13362.4497067992),
    (1.82443e-06, 3.06335050462, 16703.062133499),
    (1.68357e-06, 3.01017878073, 3337.0893083508),
    (1.67747e-06, 3.10922702911, 3344.1355450488),
    (9.389e-07, 5.65913038458, 3185.1920272656),
    (8.9244e-07, 0.46137270696, 3496.032826134),
    (4.0563e-07, 3.45931070999, 6684.7479717486),
    (3.6611e-07, 0.19723333298, 1059.3819301892),
    (2.7526e-07, 3.40697584132, 20043.6745601988),
    (2.4574e-07, 2.05709261735, 3149.1641605882),
    (2.3302e-07, 4.06054703458, 3532.0606928114),
    (2.4401e-07, 4.20197858679, 2544.3144198834),
    (2.0299e-07, 1.91147990337, 4136.9104335162),
    (1.8006e-07, 1.85198728948, 3097.88382272579),
];
pub(super) const Y3: &[Term] = &[
    (1.448778e-05, 0.0, 0.0),
    (5.48277e-06, 0.33360423382, 6681.2248533996),
    (3.16422e-06, 0.81609547752, 10021.8372800994),
    (1.21864e-06, 4.21281448757, 3340.6124266998),
    (8.8558e-07, 1.20276993071, 13362.4497067992),
    (1.9088e-07, 1.56560410465, 16703.062133499),
    (1.7293e-07, 1.97503775578, 3496.032826134),
    (1.705e-07, 4.14879086475, 3185.1920272656),
    (7.913e-08, 4.62482643997, 3337.0893083508),
    (7.879e-08, 1.48801834339, 3344.1355450488),
];
pub(super) const Y4: &[Term] = &[
    (1.2136e-07, 5.53171096923, 10021.8372800994),
    (1.4558e-07, 0.0, 0.0),
    (9.397e-08, 5.00023134055, 6681.2248533996),
    (3.728e-08, 2.31744309373, 3340.6124266998),
    (5.176e-08, 5.94994449818, 13362.4497067992),
    (2.424e-08, 3.4821298382, 3496.032826134),
    (2.408e-08, 2.63869857743, 3185.1920272656),
    (1.495e-08, 0.04984648713, 16703.062133499),
];
pub(super) const Y5: &[Term] = &[
    (3.53e-09, 3.94830849426, 10021.8372800994),
];

pub(super) const Z0: &[Term] = &[
    (0.0490120722, 3.76712324286, 3340.6124266998),
    (0.00660669541, 0.0, 0.0),
    (0.00228333904, 4.10544022266, 6681.2248533996),
    (0.00015958402, 4.44367058261, 10021.8372800994),
    (1.321976e-05, 4.78186604114, 13362.4497067992),
    (6.7966e-06, 5.65109977813, 3337.0893083508),
    (6.79219e-06, 5.02527030899, 3344.1355450488),
    (5.3114e-06, 3.86748390045, 2281.2304965106),
    (3.74993e-06, 4.33338216773, 529.6909650946),
    (3.25315e-06, 2.24562508217, 1059.3819301892),
];
pub(super) const Z1: &[Term] = &[
    (0.00331842958, 6.05027773492, 3340.6124266998),
    (0.00047930411, 3.141592653589793, 0.0),
    (9.896501e-05, 1.61155844715, 6681.2248533996),
    (1.700147e-05, 2.63703242065, 10021.8372800994),
    (2.40176e-06, 3.12712303414, 13362.4497067992),
    (1.14908e-06, 0.95987621952, 3337.0893083508),
];
pub(super) const Z2: &[Term] = &[
    (0.0001370536, 1.04212852598, 3340.6124266998),
    (5.931596e-05, 3.141592653589793, 0.0),
    (7.16728e-06, 0.12154825255, 6681.2248533996),
    (1.38514e-06, 0.78090653399, 10021.8372800994),
    (2.5745e-07, 1.39077449077, 13362.4497067992),
];
pub(super) const Z3: &[Term] = &[
    (4.89822e-06, 2.06392886831, 3340.6124266998),
    (2.12575e-06, 0.0, 0.0),
    (8.245e-08, 4.91827993759, 6681.2248533996),
    (7.509e-08, 5.39641448313, 10021.8372800994),
];
pub(super) const Z4: &[Term] = &[
    (1.5141e-07, 0.0, 0.0),
    (1.0395e-07, 3.33271505543, 3340.6124266998),
];
pub(super) const Z5: &[Term] = &[];

pub(super) const SERIES: [[&[Term]; 6]; 3] = [
    [X0, X1, X2, X3, X4, X5],
    [Y0, Y1, Y2, Y3, Y4, Y5],
    [Z0, Z1, Z2, Z3, Z4, Z5],
];
