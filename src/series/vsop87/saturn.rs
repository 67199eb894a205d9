//! VSOP87A terms for Saturn: heliocentric rectangular coordinates, ecliptic and
//! equinox J2000, AU, time in Julian millennia from J2000 TDB.
//! 463 terms, truncated offline (see `vsop87_truncate`).

use crate::series::Term;

pub(super) const X0: &[Term] = &[
    (9.51638335797, 0.87441380794, 213.299095438),
    (0.26412374238, 0.1239089262, 426.598190876),
    (0.06760430339, 4.16767145778, 206.1855484372),
    (0.06624260115, 0.7509473778, 220.4126424388),
    (0.04244797817, 0.0, 0.0),
    (0.02336340488, 2.02227784673, 7.1135470008),
    (0.01255372247, 2.17338917731, 110.2063212194),
    (0.01115684467, 3.15686878377, 419.4846438752),
    (0.01097683232, 5.65753337256, 639.897286314),
    (0.00716328481, 2.71149993708, 316.3918696566),
    (0.00509313365, 4.9586562478, 103.0927742186),
    (0.00433994439, 0.72012820974, 529.6909650946),
    (0.00372894461, 0.00137195497, 433.7117378768),
    (0.00097843523, 1.01485750417, 323.5054166574),
    (0.00080600536, 5.62103979796, 11.0457002639),
    (0.00083782316, 0.62038893702, 227.5261894396),
    (0.00074150224, 2.38206066655, 632.7837393132),
    (0.00070219382, 0.88789752415, 209.3669421749),
    (0.00068855792, 4.01788097627, 217.2312487011),
    (0.00065620467, 2.69728593339, 202.2533951741),
    (0.00058297911, 2.16155251399, 224.3447957019),
    (0.00054022837, 4.90928184374, 853.196381752),
    (0.00045550446, 1.8823503783, 14.2270940016),
    (0.00038345667, 4.39815501478, 199.0720014364),
    (0.00044551703, 5.60763553535, 63.7358983034),
    (0.00025165185, 0.37800582257, 216.4804891757),
    (0.00024554499, 4.53150598095, 210.1177017003),
    (0.00024673219, 5.9089157385, 522.5774180938),
    (0.0002467705, 5.6038938242, 415.5524906121),
    (0.00025491374, 1.63922423181, 117.3198682202),
    (0.00031253049, 4.62976601833, 735.8765135318),
    (0.00023372467, 5.53491987276, 647.0108333148),
    (0.00023355468, 0.18791490124, 149.5631971346),
    (0.00024805815, 5.50327676733, 74.7815985673),
    (0.00014731703, 4.67981909838, 277.0349937414),
    (0.00012427525, 1.02995545746, 1059.3819301892),
    (9.943329e-05, 0.84628387596, 3.9321532631),
    (0.00012393514, 4.19747622821, 490.3340891794),
    (0.00012026472, 5.66372282839, 351.8165923087),
    (8.222014e-05, 2.47875301104, 742.9900605326),
    (9.087093e-05, 4.33505326762, 1052.2683831884),
    (6.717741e-05, 5.51897460997, 838.9692877504),
    (6.232999e-05, 2.45837758015, 846.0828347512),
    (7.161671e-05, 2.18152751738, 95.9792272178),
    (6.321101e-05, 0.8391540877, 309.2783226558),
    (6.074958e-05, 6.15905897331, 440.8252848776),
    (5.343894e-05, 3.60046273598, 412.3710968744),
    (4.860582e-05, 0.26461045175, 536.8045120954),
    (5.775802e-05, 5.30717695229, 38.1330356378),
    (5.194178e-05, 4.54584467686, 210.8514148832),
    (5.152474e-05, 0.3466951715, 215.7467759928),
    (3.79254e-05, 5.99766568983, 422.6660376129),
    (3.762834e-05, 3.72112920226, 212.3358875915),
    (3.747433e-05, 1.16965137714, 214.2623032845),
    (3.114576e-05, 0.84631897292, 213.2509113282),
    (3.113641e-05, 4.0441036719, 213.3472795478),
    (2.990421e-05, 0.04148806852, 625.6701923124),
    (4.111695e-05, 5.96153153046, 137.0330241624),
    (2.96645e-05, 5.39568820046, 138.5174968707),
    (2.827527e-05, 0.73252555642, 330.6189636582),
    (3.363323e-05, 1.42089586686, 437.6438911399),
    (2.886599e-05, 1.14057922619, 85.8272988312),
    (2.634075e-05, 5.40645201521, 288.0806940053),
    (2.713354e-05, 0.96812639712, 203.7378678824),
    (3.16939e-05, 5.76640408988, 76.2660712756),
    (2.618634e-05, 5.49334837098, 127.4717966068),
    (2.527746e-05, 5.09752068381, 628.8515860501),
    (2.989778e-05, 4.15673836604, 1066.49547719),
    (2.507415e-05, 1.49447138038, 9.5612275556),
    (2.470181e-05, 5.27435870056, 1155.361157407),
    (2.427626e-05, 3.97311214231, 222.8603229936),
    (3.128325e-05, 4.05483976553, 1368.660252845),
    (2.309076e-05, 3.67821438247, 430.5303441391),
    (2.162629e-05, 3.26951119901, 340.7708920448),
    (2.912676e-05, 1.76893577106, 3.1813937377),
    (2.095366e-05, 3.55759089756, 423.4167971383),
    (2.33527e-05, 5.86791072516, 388.4651552382),
    (1.963947e-05, 2.0508648718, 1.4844727083),
];
pub(super) const X1: &[Term] = &[
    (0.07575103962, 0.0, 0.0),
    (0.03085041716, 4.27565749128, 426.598190876),
    (0.02714918399, 5.85229412397, 206.1855484372),
    (0.02643100909, 5.33291950584, 220.4126424388),
    (0.0062710452, 0.32898307969, 7.1135470008),
    (0.00256560953, 3.52478934343, 639.897286314),
    (0.00312356512, 4.83001724941, 419.4846438752),
    (0.00189196274, 4.48642453552, 433.7117378768),
    (0.0020364657, 1.10998681782, 213.299095438),
    (0.00119531145, 1.14735096078, 110.2063212194),
    (0.00066764238, 3.72346596928, 316.3918696566),
    (0.00066901225, 5.2025750038, 227.5261894396),
    (0.0003100084, 6.06067919437, 199.0720014364),
    (0.000304181, 0.18746903351, 14.2270940016),
    (0.0002227521, 6.19530878014, 103.0927742186),
    (0.00018939377, 2.77618306725, 853.196381752),
    (0.00018093009, 5.09162723865, 209.3669421749),
    (0.00017777854, 6.10381593351, 217.2312487011),
    (0.00016296201, 4.86945681437, 216.4804891757),
    (0.0001712025, 4.59611664188, 632.7837393132),
    (0.00015894491, 0.03653502304, 210.1177017003),
    (0.00016192653, 5.6079801445, 323.5054166574),
    (0.0001446601, 3.6744938009, 647.0108333148),
    (0.00011061528, 0.03163071461, 117.3198682202),
    (9.873183e-05, 5.20065307357, 202.2533951741),
    (8.707608e-05, 6.03511731637, 224.3447957019),
    (5.499109e-05, 4.40350603415, 440.8252848776),
    (5.512222e-05, 2.60556642348, 11.0457002639),
    (4.008257e-05, 1.48942966807, 522.5774180938),
    (3.571196e-05, 5.10821908379, 412.3710968744),
    (2.731381e-05, 4.1089222366, 149.5631971346),
    (2.763786e-05, 3.96253590209, 95.9792272178),
    (1.875862e-05, 2.52384080586, 3.9321532631),
    (1.765816e-05, 0.75684544353, 277.0349937414),
    (1.688957e-05, 3.98270950731, 422.6660376129),
    (1.544787e-05, 5.30283923836, 330.6189636582),
    (1.449143e-05, 6.26507179861, 529.6909650946),
    (1.395551e-05, 2.03533642541, 1066.49547719),
    (1.330413e-05, 5.06312203212, 234.6397364404),
    (1.511648e-05, 6.23274598777, 3.1813937377),
    (1.27105e-05, 2.40338468675, 415.5524906121),
    (1.17168e-05, 4.59341412127, 536.8045120954),
    (1.129056e-05, 5.45794529295, 423.4167971383),
    (1.1264e-05, 2.88173213734, 860.3099287528),
    (1.101245e-05, 4.07698108824, 429.7795846137),
    (1.273315e-05, 0.09572429396, 742.9900605326),
    (1.342277e-05, 2.98929557875, 210.8514148832),
    (1.331045e-05, 1.90899526877, 215.7467759928),
    (9.59849e-06, 0.92675530269, 838.9692877504),
    (9.61568e-06, 4.48936457741, 846.0828347512),
    (9.2641e-06, 1.35857315584, 625.6701923124),
];
pub(super) const X2: &[Term] = &[
    (0.00560746334, 1.26401632282, 206.1855484372),
    (0.00545834518, 3.62343709657, 220.4126424388),
    (0.00443342186, 3.141592653589793, 0.0),
    (0.00336109713, 2.4254743246, 213.299095438),
    (0.00224302269, 2.49151203519, 426.598190876),
    (0.00087170924, 4.89048951691, 7.1135470008),
    (0.00050028094, 2.70119046081, 433.7117378768),
    (0.0004512259, 0.36735068943, 419.4846438752),
    (0.00032847824, 1.59210153669, 639.897286314),
    (0.00027153555, 3.49804002218, 227.5261894396),
    (0.00012676167, 1.4546572953, 199.0720014364),
    (0.00010330738, 4.7694953129, 14.2270940016),
    (7.249149e-05, 5.70264553247, 110.2063212194),
    (4.653214e-05, 1.83710048213, 647.0108333148),
    (4.923585e-05, 3.08463039042, 216.4804891757),
    (4.777358e-05, 1.81695155349, 210.1177017003),
    (4.166633e-05, 5.32887874226, 316.3918696566),
    (3.508385e-05, 0.78251653369, 853.196381752),
    (2.66047e-05, 3.16731393212, 209.3669421749),
    (2.538027e-05, 2.65097612407, 440.8252848776),
    (2.568114e-05, 1.74024228572, 217.2312487011),
    (2.503277e-05, 4.69450368911, 117.3198682202),
    (2.506986e-05, 1.74781817701, 103.0927742186),
    (2.129256e-05, 0.28453141367, 632.7837393132),
    (1.841989e-05, 3.99269872894, 323.5054166574),
    (1.228511e-05, 0.42906039519, 412.3710968744),
    (8.04732e-06, 3.35740706049, 234.6397364404),
    (7.96407e-06, 1.09483823163, 202.2533951741),
    (5.45426e-06, 5.78793713141, 95.9792272178),
    (7.32525e-06, 3.86150260922, 224.3447957019),
    (4.55657e-06, 3.49866480518, 522.5774180938),
    (4.56586e-06, 5.31237952032, 529.6909650946),
];
pub(super) const X3: &[Term] = &[
    (0.00077115952, 2.97714385362, 206.1855484372),
    (0.00075340436, 1.89208005248, 220.4126424388),
    (0.00018450895, 3.141592653589793, 0.0),
    (0.00010527244, 0.66368256891, 426.598190876),
    (8.994946e-05, 0.91696559755, 433.7117378768),
    (7.403594e-05, 1.7862738587, 227.5261894396),
    (8.04516e-05, 3.12864412887, 7.1135470008),
    (4.505149e-05, 2.24531319187, 419.4846438752),
    (3.46801e-05, 3.14590544446, 199.0720014364),
    (2.974601e-05, 6.00030641555, 639.897286314),
    (2.342089e-05, 3.06091771643, 14.2270940016),
    (1.230715e-05, 4.38196130069, 213.299095438),
    (1.023888e-05, 0.01138655869, 647.0108333148),
    (7.88529e-06, 0.89850292553, 440.8252848776),
    (8.06346e-06, 1.28205831043, 216.4804891757),
    (7.68731e-06, 3.61309275908, 210.1177017003),
    (3.84249e-06, 3.06233558203, 117.3198682202),
    (4.31624e-06, 3.77909555661, 110.2063212194),
    (4.56158e-06, 5.14235391148, 853.196381752),
    (3.23749e-06, 1.6513598609, 234.6397364404),
    (2.79312e-06, 2.09194739376, 412.3710968744),
    (2.42325e-06, 3.37263291828, 103.0927742186),
];
pub(super) const X4: &[Term] = &[
    (7.959921e-05, 4.70523623364, 206.1855484372),
    (7.836652e-05, 0.13981693631, 220.4126424388),
    (1.511196e-05, 0.06561560462, 227.5261894396),
    (1.223066e-05, 5.41618485361, 433.7117378768),
    (7.0278e-06, 4.84941923986, 199.0720014364),
    (8.61569e-06, 0.0, 0.0),
    (5.50606e-06, 1.37376296077, 7.1135470008),
    (3.53954e-06, 4.14510701125, 419.4846438752),
    (3.86476e-06, 1.33814676867, 14.2270940016),
    (3.86632e-06, 5.00698289959, 426.598190876),
    (1.85617e-06, 5.43394463245, 440.8252848776),
    (2.08917e-06, 4.14160968677, 639.897286314),
    (1.71842e-06, 4.4745363058, 647.0108333148),
];
pub(super) const X5: &[Term] = &[
    (5.8925e-06, 0.13910544483, 206.1855484372),
    (5.85873e-06, 4.66559223624, 220.4126424388),
    (2.25585e-06, 4.60652710308, 227.5261894396),
    (1.30928e-06, 3.62464025902, 433.7117378768),
    (9.6655e-07, 0.2721100815, 199.0720014364),
];

pub(super) const Y0: &[Term] = &[
    (9.52986882699, 5.58600556665, 213.299095438),
    (0.79387988806, 3.141592653589793, 0.0),
    (0.26441781302, 4.83528061849, 426.598190876),
    (0.06916653915, 2.55279408706, 206.1855484372),
    (0.06633570703, 5.46258848288, 220.4126424388),
    (0.02345609742, 0.44652132519, 7.1135470008),
    (0.01183874652, 1.34638298371, 419.4846438752),
    (0.01245790434, 0.60367177975, 110.2063212194),
    (0.01098751131, 4.08608782813, 639.897286314),
    (0.00700849336, 1.13611298025, 316.3918696566),
    (0.00434466176, 5.42474696262, 529.6909650946),
    (0.00373327342, 4.71308726958, 433.7117378768),
    (0.00335162363, 0.66422253983, 103.0927742186),
    (0.00097837745, 5.72844290173, 323.5054166574),
    (0.00080571808, 4.0529544991, 11.0457002639),
    (0.00083899691, 5.33204070267, 227.5261894396),
    (0.00070158491, 5.59777963629, 209.3669421749),
    (0.00065937657, 1.25969608208, 202.2533951741),
    (0.00070957225, 0.88888207567, 632.7837393132),
    (0.00068985859, 2.44460312617, 217.2312487011),
    (0.00058382264, 0.58978766922, 224.3447957019),
    (0.00054049836, 3.33757904879, 853.196381752),
    (0.0004579093, 0.30331527632, 14.2270940016),
    (0.00041976402, 2.62591355948, 199.0720014364),
    (0.00044697175, 0.90661238256, 63.7358983034),
    (0.00025199575, 5.08963506006, 216.4804891757),
    (0.00024640836, 2.95445247282, 210.1177017003),
    (0.00024835151, 4.02630190571, 415.5524906121),
    (0.00025545907, 0.06626229252, 117.3198682202),
    (0.00029666833, 6.09910638345, 735.8765135318),
    (0.00023396742, 3.96337393635, 647.0108333148),
    (0.00023380691, 4.90051072276, 149.5631971346),
    (0.00020272215, 2.34319548198, 309.2783226558),
    (0.00020099552, 0.98365186365, 522.5774180938),
    (0.0002482795, 3.926814289, 74.7815985673),
    (0.00015383927, 3.10227822627, 277.0349937414),
    (0.0001162921, 5.74108283772, 1059.3819301892),
    (0.00012422966, 2.62557865743, 490.3340891794),
    (0.00012048048, 4.09265980116, 351.8165923087),
    (9.551796e-05, 3.48788042094, 95.9792272178),
    (7.670379e-05, 1.16594276164, 742.9900605326),
    (6.919946e-05, 1.17090063883, 412.3710968744),
    (9.034877e-05, 5.86816144198, 1052.2683831884),
    (6.536751e-05, 0.84246459392, 838.9692877504),
    (6.082097e-05, 4.58758280729, 440.8252848776),
    (5.027211e-05, 0.93213690546, 846.0828347512),
    (4.838146e-05, 4.98563812475, 536.8045120954),
    (5.768897e-05, 3.73776690402, 38.1330356378),
    (5.201849e-05, 2.9748280243, 210.8514148832),
    (5.156578e-05, 5.05796998564, 215.7467759928),
    (3.792348e-05, 4.41806046981, 422.6660376129),
    (3.881104e-05, 3.38026646963, 3.9321532631),
    (3.768751e-05, 2.1495424736, 212.3358875915),
    (3.75201e-05, 5.88125434018, 214.2623032845),
    (3.118938e-05, 5.55799397159, 213.2509113282),
    (3.118056e-05, 2.47259780102, 213.3472795478),
    (3.815691e-05, 2.44166851155, 625.6701923124),
    (4.042463e-05, 1.24471211016, 137.0330241624),
    (2.829944e-05, 5.44434225998, 330.6189636582),
    (3.36727e-05, 6.13298847057, 437.6438911399),
    (2.891352e-05, 5.85313497106, 85.8272988312),
    (2.774595e-05, 5.61594351302, 203.7378678824),
    (2.638715e-05, 3.83678156812, 288.0806940053),
    (3.17168e-05, 4.19553075395, 76.2660712756),
    (2.532374e-05, 3.52629372341, 628.8515860501),
    (2.533632e-05, 3.89788590926, 138.5174968707),
    (2.982174e-05, 2.58535107213, 1066.49547719),
    (2.620642e-05, 0.69751279148, 127.4717966068),
    (2.501775e-05, 6.19929274396, 9.5612275556),
    (2.448467e-05, 0.54179432209, 1155.361157407),
    (2.431496e-05, 2.40122451395, 222.8603229936),
    (3.138628e-05, 5.63058455924, 1368.660252845),
    (2.269226e-05, 2.12401905105, 430.5303441391),
    (2.078049e-05, 1.95682348964, 423.4167971383),
    (2.67075e-05, 0.18165311734, 3.1813937377),
    (2.339764e-05, 4.29619053852, 388.4651552382),
    (1.989253e-05, 0.42496478369, 1.4844727083),
];
pub(super) const Y1: &[Term] = &[
    (0.05373889135, 0.0, 0.0),
    (0.03090575152, 2.70346890906, 426.598190876),
    (0.02741594312, 4.26667636015, 206.1855484372),
    (0.02647489677, 3.76132298889, 220.4126424388),
    (0.00631520527, 5.0324550528, 7.1135470008),
    (0.00256799701, 1.95351819758, 639.897286314),
    (0.0031227193, 3.25850205023, 419.4846438752),
    (0.00189433319, 2.91501840819, 433.7117378768),
    (0.00164133553, 5.29239290066, 213.299095438),
    (0.00116791227, 5.8914667576, 110.2063212194),
    (0.00067210919, 2.17042636344, 316.3918696566),
    (0.00067003292, 3.63101075514, 227.5261894396),
    (0.00033002406, 4.35527405801, 199.0720014364),
    (0.00030628998, 4.88861760772, 14.2270940016),
    (0.00022234714, 4.62212779231, 103.0927742186),
    (0.00018945004, 1.20412493845, 853.196381752),
    (0.00018079959, 3.51566153251, 209.3669421749),
    (0.00017791543, 4.53214140649, 217.2312487011),
    (0.00016320701, 3.2978403097, 216.4804891757),
    (0.00015944258, 4.74503265169, 210.1177017003),
    (0.00016717122, 3.00270792752, 632.7837393132),
    (0.00016149947, 4.04186432517, 323.5054166574),
    (0.00014481431, 2.1029829865, 647.0108333148),
    (0.0001108404, 4.74073871754, 117.3198682202),
    (9.905491e-05, 3.60258599375, 202.2533951741),
    (8.726051e-05, 4.46341342877, 224.3447957019),
    (6.585597e-05, 4.07326320487, 309.2783226558),
    (5.505978e-05, 2.8320739024, 440.8252848776),
    (5.424041e-05, 1.0319768441, 11.0457002639),
    (4.178266e-05, 3.01038512076, 412.3710968744),
    (4.049905e-05, 5.17488767645, 95.9792272178),
    (2.735256e-05, 2.53975850409, 149.5631971346),
    (2.369024e-05, 2.40497927917, 522.5774180938),
    (1.745258e-05, 5.50576015456, 277.0349937414),
    (1.69279e-05, 2.39926502529, 422.6660376129),
    (1.546006e-05, 3.73156925599, 330.6189636582),
    (1.389354e-05, 0.46207025895, 1066.49547719),
    (1.332553e-05, 3.49199812296, 234.6397364404),
    (1.300934e-05, 0.83727681906, 415.5524906121),
    (1.393622e-05, 4.62214277175, 3.1813937377),
    (1.174319e-05, 2.72609984335, 846.0828347512),
    (1.14801e-05, 3.04374738882, 536.8045120954),
    (1.314125e-05, 4.388916566, 625.6701923124),
    (1.127952e-05, 3.87309692307, 423.4167971383),
    (1.127646e-05, 1.31088906213, 860.3099287528),
    (1.519732e-05, 6.12880664637, 3.9321532631),
    (1.102361e-05, 2.50535306014, 429.7795846137),
    (1.344891e-05, 1.41793593685, 210.8514148832),
    (1.331786e-05, 0.33834520814, 215.7467759928),
    (9.61358e-06, 4.02278025887, 529.6909650946),
];
pub(super) const Y2: &[Term] = &[
    (0.00563706537, 5.97115878242, 206.1855484372),
    (0.00547012116, 2.05154973426, 220.4126424388),
    (0.00458518613, 0.0, 0.0),
    (0.00362294249, 0.89540100509, 213.299095438),
    (0.00225521642, 0.91699821445, 426.598190876),
    (0.00088390611, 3.30289449917, 7.1135470008),
    (0.00050101314, 1.12976163835, 433.7117378768),
    (0.00045516403, 5.07669466539, 419.4846438752),
    (0.00032896745, 0.02089057938, 639.897286314),
    (0.00027199743, 1.9263841764, 227.5261894396),
    (0.00013251505, 6.07693099404, 199.0720014364),
    (0.00010425984, 3.18246869028, 14.2270940016),
    (6.673556e-05, 4.24747633887, 110.2063212194),
    (4.658591e-05, 0.26557833758, 647.0108333148),
    (4.934094e-05, 1.51301179516, 216.4804891757),
    (4.789554e-05, 0.24337901916, 210.1177017003),
    (4.167268e-05, 3.73203671391, 316.3918696566),
    (3.509537e-05, 5.49281440568, 853.196381752),
    (2.74347e-05, 6.21939083886, 103.0927742186),
    (2.661172e-05, 1.58795412736, 209.3669421749),
    (2.541191e-05, 1.07964653574, 440.8252848776),
    (2.568018e-05, 0.16811216098, 217.2312487011),
    (2.507738e-05, 3.1188274629, 117.3198682202),
    (2.159089e-05, 4.99912567024, 632.7837393132),
    (1.828412e-05, 2.4336865059, 323.5054166574),
    (1.351629e-05, 4.81673889364, 412.3710968744),
    (1.177305e-05, 5.84484412189, 309.2783226558),
    (8.04912e-06, 1.78663050298, 234.6397364404),
    (8.91561e-06, 0.57880622764, 95.9792272178),
    (8.06554e-06, 5.80160560511, 202.2533951741),
    (7.37518e-06, 2.29009633302, 224.3447957019),
];
pub(super) const Y3: &[Term] = &[
    (0.00077376615, 1.40391048961, 206.1855484372),
    (0.00075564351, 0.31962896379, 220.4126424388),
    (0.00022843837, 3.141592653589793, 0.0),
    (0.00010672263, 5.3649566382, 426.598190876),
    (9.010175e-05, 5.62865146645, 433.7117378768),
    (7.418018e-05, 0.21442310101, 227.5261894396),
    (8.298723e-05, 1.52262563519, 7.1135470008),
    (4.507061e-05, 0.6724896948, 419.4846438752),
    (3.581682e-05, 1.5146678603, 199.0720014364),
    (2.981969e-05, 4.42868951627, 639.897286314),
    (2.376221e-05, 1.4623277918, 14.2270940016),
    (1.024263e-05, 4.72337917196, 647.0108333148),
    (7.88826e-06, 5.61078104123, 440.8252848776),
    (8.07916e-06, 5.99385575552, 216.4804891757),
    (7.70831e-06, 2.04234808917, 210.1177017003),
    (3.8421e-06, 1.4854244509, 117.3198682202),
    (4.56443e-06, 3.56523371093, 853.196381752),
    (3.24148e-06, 0.08074667476, 234.6397364404),
    (3.38016e-06, 2.47226721573, 110.2063212194),
    (3.55769e-06, 5.40701066557, 213.299095438),
    (2.96603e-06, 0.32077836251, 412.3710968744),
    (2.41378e-06, 1.79772375424, 103.0927742186),
];
pub(super) const Y4: &[Term] = &[
    (7.978886e-05, 3.13229268011, 206.1855484372),
    (7.868379e-05, 4.84940260021, 220.4126424388),
    (1.514835e-05, 4.77675733867, 227.5261894396),
    (1.225569e-05, 3.84500138574, 433.7117378768),
    (7.20573e-06, 3.23773181595, 199.0720014364),
    (6.09979e-06, 5.96461769948, 7.1135470008),
    (3.5386e-06, 2.57548318224, 419.4846438752),
    (3.82994e-06, 6.00399581554, 14.2270940016),
    (4.6934e-06, 3.141592653589793, 0.0),
    (4.03662e-06, 3.41614173802, 426.598190876),
    (1.85465e-06, 3.86274212431, 440.8252848776),
    (2.08259e-06, 2.57791157635, 639.897286314),
    (1.72118e-06, 2.90478987674, 647.0108333148),
];
pub(super) const Y5: &[Term] = &[
    (5.8908e-06, 4.84910386986, 206.1855484372),
    (5.90114e-06, 3.08953743297, 220.4126424388),
    (2.26448e-06, 3.03832080293, 227.5261894396),
    (1.31513e-06, 2.04967560816, 433.7117378768),
    (9.4102e-07, 5.02382407527, 199.0720014364),
];

pub(super) const Z0: &[Term] = &[
    (0.4135695094, 3.60234142982, 213.299095438),
    (0.01148283576, 2.85128367469, 426.598190876),
    (0.01214249867, 0.0, 0.0),
    (0.00329280791, 0.57121407104, 206.1855484372),
    (0.00286934048, 3.48073526693, 220.4126424388),
    (0.00099076584, 4.73369511264, 7.1135470008),
    (0.0005736182, 4.92611225093, 110.2063212194),
    (0.00047738127, 2.10039779728, 639.897286314),
    (0.00043458803, 5.84904978051, 419.4846438752),
    (0.00034565673, 5.4261422959, 316.3918696566),
    (0.00016185391, 2.72987173675, 433.7117378768),
    (9.00127e-05, 1.38140102737, 103.0927742186),
    (0.00011433574, 3.71662021072, 529.6909650946),
    (5.398708e-05, 5.13204892363, 202.2533951741),
    (3.902467e-05, 3.71499738796, 323.5054166574),
    (3.709212e-05, 5.05549348785, 632.7837393132),
    (3.6141e-05, 3.35210451276, 227.5261894396),
    (3.379953e-05, 2.13868919206, 11.0457002639),
    (3.089874e-05, 3.62572857085, 209.3669421749),
    (2.683064e-05, 4.87689555581, 224.3447957019),
    (2.963493e-05, 0.46490184985, 217.2312487011),
    (2.343367e-05, 1.3455827834, 853.196381752),
    (2.423663e-05, 2.9290709476, 63.7358983034),
    (1.941205e-05, 4.59421314662, 14.2270940016),
    (1.990145e-05, 0.73166053611, 199.0720014364),
];
pub(super) const Z1: &[Term] = &[
    (0.01906503283, 4.94544746116, 213.299095438),
    (0.00528301265, 3.141592653589793, 0.0),
    (0.00130262284, 2.26140980879, 206.1855484372),
    (0.00101466332, 1.79095829545, 220.4126424388),
    (0.00085947578, 0.51612788497, 426.598190876),
    (0.00022257446, 3.07684015656, 7.1135470008),
    (0.00016179946, 1.19987517506, 419.4846438752),
    (9.117402e-05, 6.17205626814, 639.897286314),
    (7.470703e-05, 0.93135621171, 433.7117378768),
    (4.966668e-05, 0.19044864213, 316.3918696566),
    (3.816564e-05, 4.38284565245, 110.2063212194),
    (2.72412e-05, 1.65580138665, 227.5261894396),
    (1.73454e-05, 3.51628075636, 103.0927742186),
    (1.541995e-05, 2.42323572812, 199.0720014364),
    (1.209302e-05, 2.91140089093, 14.2270940016),
];
pub(super) const Z2: &[Term] = &[
    (0.00131275155, 0.08868998101, 213.299095438),
    (0.00030147649, 3.91396203887, 206.1855484372),
    (0.00019322173, 0.09228748624, 220.4126424388),
    (6.868926e-05, 5.48420255395, 426.598190876),
    (2.826107e-05, 1.36583318555, 7.1135470008),
    (2.646332e-05, 2.94607395955, 419.4846438752),
    (3.138233e-05, 0.0, 0.0),
    (1.844798e-05, 5.43612062856, 433.7117378768),
    (1.055383e-05, 6.23890785179, 227.5261894396),
    (1.036435e-05, 4.33916308552, 639.897286314),
    (6.34611e-06, 4.10413821983, 199.0720014364),
    (4.93127e-06, 1.74516983084, 316.3918696566),
];
pub(super) const Z3: &[Term] = &[
    (4.559419e-05, 1.70646871501, 213.299095438),
    (4.779074e-05, 5.5772375633, 206.1855484372),
    (3.965402e-05, 0.0, 0.0),
    (2.508242e-05, 4.64959056313, 220.4126424388),
    (3.14334e-06, 3.65978364894, 433.7117378768),
    (2.76132e-06, 4.53051550901, 227.5261894396),
    (3.22702e-06, 4.70757024216, 419.4846438752),
    (3.27628e-06, 3.31597275465, 426.598190876),
    (2.43745e-06, 5.87706678179, 7.1135470008),
];
pub(super) const Z4: &[Term] = &[
    (5.74306e-06, 0.96387396086, 206.1855484372),
    (2.52516e-06, 2.90188946355, 220.4126424388),
    (2.44875e-06, 2.96492296609, 213.299095438),
];
pub(super) const Z5: &[Term] = &[];

pub(super) const SERIES: [[&[Term]; 6]; 3] = [
    [X0, X1, X2, X3, X4, X5],
    [Y0, Y1, Y2, Y3, Y4, Y5],
    [Z0, Z1, Z2, Z3, Z4, Z5],
];
