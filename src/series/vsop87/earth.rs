//! VSOP87A terms for Earth: heliocentric rectangular coordinates, ecliptic and
//! equinox J2000, AU, time in Julian millennia from J2000 TDB.
//! 120 terms, truncated offline (see `vsop87_truncate`).

use crate::series::Term;

pub(super) const X0: &[Term] = &[
    (0.99982928844, 1.75348568475, 6283.0758499914),
    (0.008352573, 1.7103453945, 12566.1516999828),
    (0.00561144206, 0.0, 0.0),
    (0.00010466628, 1.66722645223, 18849.2275499742),
    (3.110838e-05, 0.66875185215, 83996.84731811189),
    (2.552498e-05, 0.58310207301, 529.6909650946),
    (2.137256e-05, 1.09235189672, 1577.3435424478),
    (1.709103e-05, 0.49540223397, 6279.5527316424),
    (1.707882e-05, 6.15315547484, 6286.5989683404),
    (1.445242e-05, 3.4727278376, 2352.8661537718),
    (1.091006e-05, 3.68984782465, 5223.6939198022),
    (9.34429e-06, 6.07389922585, 12036.4607348882),
    (8.99144e-06, 3.17571950523, 10213.285546211),
    (5.66514e-06, 2.15262034016, 1059.3819301892),
    (6.84416e-06, 1.30699021227, 5753.3848848968),
    (7.34455e-06, 4.3550019653, 398.1490034082),
    (6.81437e-06, 2.21821534685, 4705.7323075436),
    (6.11238e-06, 5.38479234323, 6812.766815086),
    (4.51836e-06, 6.08768280868, 5884.9268465832),
    (4.51953e-06, 1.27933728354, 6256.7775301916),
    (4.49517e-06, 5.36923831714, 6309.3741697912),
    (4.06248e-06, 0.54361367084, 6681.2248533996),
    (5.40957e-06, 0.78677364655, 775.522611324),
    (5.47004e-06, 1.46146650376, 14143.4952424306),
    (5.20484e-06, 4.43295799975, 7860.4193924392),
    (2.1496e-06, 4.50213844573, 11506.7697697936),
    (2.27892e-06, 1.23941482802, 7058.5984613154),
    (2.25878e-06, 3.27244306207, 4694.0029547076),
    (2.5582e-06, 2.26556277246, 12168.0026965746),
    (2.56182e-06, 1.4547411619, 709.9330485583),
    (2.09024e-06, 5.85207528073, 11790.6290886588),
    (1.99971e-06, 4.07209938245, 17789.845619785),
];
pub(super) const X1: &[Term] = &[
    (0.00123403056, 0.0, 0.0),
    (0.00051500156, 6.00266267204, 12566.1516999828),
    (1.290726e-05, 5.95943124583, 18849.2275499742),
    (1.068627e-05, 2.01554176551, 6283.0758499914),
    (2.12689e-06, 1.73380190491, 6279.5527316424),
    (2.12515e-06, 4.91489371033, 6286.5989683404),
    (6.226e-07, 0.36239798178, 4705.7323075436),
    (5.9822e-07, 3.81195369871, 6256.7775301916),
    (5.9514e-07, 2.8363416015, 6309.3741697912),
    (4.8841e-07, 5.21419389335, 775.522611324),
];
pub(super) const X2: &[Term] = &[
    (4.143217e-05, 3.141592653589793, 0.0),
    (2.175695e-05, 4.39999849572, 12566.1516999828),
    (9.95233e-06, 0.20790847155, 6283.0758499914),
    (9.2659e-07, 4.1928547101, 18849.2275499742),
    (1.3679e-07, 3.37833642063, 6286.5989683404),
    (1.3668e-07, 3.27271492019, 6279.5527316424),
];
pub(super) const X3: &[Term] = &[
    (1.75213e-06, 3.141592653589793, 0.0),
    (7.2337e-07, 2.89303952476, 12566.1516999828),
    (8.364e-08, 3.85500954096, 6283.0758499914),
    (5.04e-08, 2.53152989786, 18849.2275499742),
];
pub(super) const X4: &[Term] = &[
    (4.022e-08, 0.0, 0.0),
    (1.927e-08, 1.18746233453, 12566.1516999828),
];
pub(super) const X5: &[Term] = &[];

pub(super) const Y0: &[Term] = &[
    (0.9998921103, 0.18265890456, 6283.0758499914),
    (0.02442699036, 3.141592653589793, 0.0),
    (0.00835292314, 0.13952878991, 12566.1516999828),
    (0.00010466965, 0.09641690558, 18849.2275499742),
    (3.110838e-05, 5.38114091484, 83996.84731811189),
    (2.570338e-05, 5.3010397336, 529.6909650946),
    (2.147473e-05, 2.66253538905, 1577.3435424478),
    (1.709219e-05, 5.20780401071, 6279.5527316424),
    (1.707987e-05, 4.58232858766, 6286.5989683404),
    (1.440265e-05, 1.90068164664, 2352.8661537718),
    (1.135092e-05, 5.2731341522, 5223.6939198022),
    (9.34539e-06, 4.50301201844, 12036.4607348882),
    (9.00565e-06, 1.6056328812, 10213.285546211),
    (5.67126e-06, 0.58142248753, 1059.3819301892),
    (7.44932e-06, 2.80728871886, 398.1490034082),
    (6.39316e-06, 6.02923915017, 5753.3848848968),
    (6.81324e-06, 0.64729627497, 4705.7323075436),
    (6.11347e-06, 3.81381495286, 6812.766815086),
    (4.50435e-06, 4.52785572489, 5884.9268465832),
    (4.52018e-06, 5.99167242707, 6256.7775301916),
    (4.49968e-06, 3.79880375595, 6309.3741697912),
    (5.5139e-06, 3.96125249369, 5507.5532386674),
    (4.06334e-06, 5.25616268027, 6681.2248533996),
    (5.41273e-06, 5.49902805917, 775.522611324),
    (5.4636e-06, 6.17311131785, 14143.4952424306),
    (5.07084e-06, 2.87025193381, 7860.4193924392),
    (2.19504e-06, 2.95216139568, 11506.7697697936),
    (2.27937e-06, 5.95179248814, 7058.5984613154),
    (2.27792e-06, 4.84547074733, 4694.0029547076),
    (2.55845e-06, 0.69454231563, 12168.0026965746),
    (2.56132e-06, 6.16722512388, 709.9330485583),
    (2.06257e-06, 4.28366728882, 11790.6290886588),
    (2.00005e-06, 2.5014408812, 17789.845619785),
];
pub(super) const Y1: &[Term] = &[
    (0.00093046324, 0.0, 0.0),
    (0.00051506609, 4.43180499286, 12566.1516999828),
    (1.2908e-05, 4.3886054854, 18849.2275499742),
    (4.6455e-06, 5.82729912952, 6283.0758499914),
    (2.12689e-06, 0.16300556918, 6279.5527316424),
    (2.12533e-06, 3.34400595407, 6286.5989683404),
    (6.2345e-07, 5.07377354827, 4705.7323075436),
    (5.9794e-07, 2.24100907272, 6256.7775301916),
    (5.9441e-07, 1.26619990626, 6309.3741697912),
    (4.8987e-07, 3.64166577835, 775.522611324),
];
pub(super) const Y2: &[Term] = &[
    (5.080208e-05, 0.0, 0.0),
    (2.178016e-05, 2.82957544235, 12566.1516999828),
    (1.020487e-05, 4.63746718598, 6283.0758499914),
    (9.2688e-07, 2.6221874842, 18849.2275499742),
    (1.368e-07, 1.80736896884, 6286.5989683404),
    (1.3668e-07, 1.70191859339, 6279.5527316424),
];
pub(super) const Y3: &[Term] = &[
    (1.28116e-06, 3.141592653589793, 0.0),
    (7.2366e-07, 1.32019314413, 12566.1516999828),
    (1.3847e-07, 5.37444701633, 6283.0758499914),
    (5.044e-08, 0.96001931081, 18849.2275499742),
];
pub(super) const Y4: &[Term] = &[
    (4.187e-08, 3.141592653589793, 0.0),
    (1.931e-08, 5.89883838, 12566.1516999828),
];
pub(super) const Y5: &[Term] = &[];

pub(super) const Z0: &[Term] = &[
    (2.7962e-06, 3.19870156017, 84334.66158130829),
];
pub(super) const Z1: &[Term] = &[
    (0.00227822442, 3.41372504278, 6283.0758499914),
    (5.429282e-05, 0.0, 0.0),
    (1.903183e-05, 3.37061270964, 12566.1516999828),
];
pub(super) const Z2: &[Term] = &[
    (9.721989e-05, 5.15233725915, 6283.0758499914),
    (3.49501e-06, 3.141592653589793, 0.0),
    (6.7136e-07, 0.64403888586, 12566.1516999828),
];
pub(super) const Z3: &[Term] = &[
    (2.76077e-06, 0.5941325873, 6283.0758499914),
    (2.5551e-07, 3.141592653589793, 0.0),
];
pub(super) const Z4: &[Term] = &[
    (5.751e-08, 2.27069090892, 6283.0758499914),
    (1.305e-08, 0.0, 0.0),
];
pub(super) const Z5: &[Term] = &[];

pub(super) const SERIES: [[&[Term]; 6]; 3] = [
    [X0, X1, X2, X3, X4, X5],
    [Y0, Y1, Y2, Y3, Y4, Y5],
    [Z0, Z1, Z2, Z3, Z4, Z5],
];
